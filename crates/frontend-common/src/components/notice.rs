use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Properties, Clone, PartialEq)]
pub struct NoticeProps {
    pub kind: NoticeKind,
    pub message: AttrValue,
}

/// Status line under a form
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    match props.kind {
        NoticeKind::Success => html! {
            <div class="mt-4 p-3 bg-green-100 border-l-4 border-green-500 text-green-700 rounded-xl shadow-md" role="status">
                {props.message.clone()}
            </div>
        },
        NoticeKind::Error => html! {
            <p class="mt-2 text-sm text-red-600" role="alert">{props.message.clone()}</p>
        },
    }
}
