use dioxus::prelude::*;

/// A full-screen backdrop that centers its children in a modal card.
/// Clicking outside the card triggers `on_close` when one is given; without
/// it the dialog can only be left through its own buttons.
#[component]
pub fn ModalOverlay(
    #[props(default)] on_close: Option<EventHandler<()>>,
    #[props(default)] size: ModalSize,
    children: Element,
) -> Element {
    let card_class = format!("modal-card {}", size.class());

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| {
                if let Some(handler) = on_close {
                    handler.call(());
                }
            },
            div {
                class: card_class,
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalSize {
    Narrow,
    #[default]
    Regular,
    Wide,
}

impl ModalSize {
    fn class(self) -> &'static str {
        match self {
            Self::Narrow => "modal-card--narrow",
            Self::Regular => "",
            Self::Wide => "modal-card--wide",
        }
    }
}
