use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config::ids;
use crate::dom;

/// Open/closed state of a dialog plus whatever had focus before it opened.
#[derive(Debug)]
pub struct ModalState<F> {
    open: bool,
    return_focus: Option<F>,
}

impl<F> Default for ModalState<F> {
    fn default() -> Self {
        Self {
            open: false,
            return_focus: None,
        }
    }
}

impl<F> ModalState<F> {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns false when the dialog was already open, in which case the
    /// remembered focus target is kept.
    pub fn open(&mut self, focused: Option<F>) -> bool {
        if self.open {
            return false;
        }
        self.open = true;
        self.return_focus = focused;
        true
    }

    /// Hands back the element to refocus. It is given out only once.
    pub fn close(&mut self) -> Option<F> {
        self.open = false;
        self.return_focus.take()
    }
}

pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

/// Only a click landing on the backdrop itself counts, not one that bubbled
/// up from the dialog content.
pub fn is_backdrop_click<T: PartialEq>(target: Option<&T>, backdrop: Option<&T>) -> bool {
    matches!((target, backdrop), (Some(target), Some(backdrop)) if target == backdrop)
}

#[function_component(CommunityModal)]
pub fn community_modal() -> Html {
    let state = use_mut_ref(ModalState::<HtmlElement>::default);
    let force_update = use_force_update();
    let modal_ref = use_node_ref();
    let title_ref = use_node_ref();
    let is_open = state.borrow().is_open();

    let open_modal = {
        let state = state.clone();
        let modal_ref = modal_ref.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: MouseEvent| {
            if modal_ref.get().is_none() {
                return;
            }
            if state.borrow_mut().open(dom::active_element()) {
                info!("Opening community modal");
                force_update.force_update();
            }
        })
    };

    let close_modal = {
        let state = state.clone();
        let modal_ref = modal_ref.clone();
        Callback::from(move |_: ()| {
            if modal_ref.get().is_none() {
                return;
            }
            let return_focus = state.borrow_mut().close();
            info!("Closing community modal");
            force_update.force_update();
            if let Some(element) = return_focus {
                dom::focus(&element);
            }
        })
    };

    // The document keydown listener lives exactly as long as the modal is
    // open. Closing re-renders with is_open == false, which runs the cleanup.
    {
        let close_modal = close_modal.clone();
        let title_ref = title_ref.clone();
        use_effect_with_deps(
            move |is_open| {
                let mut listener = None;
                if *is_open {
                    if let Some(title) = title_ref.cast::<HtmlElement>() {
                        dom::focus(&title);
                    }

                    let keydown_callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if is_dismiss_key(&e.key()) {
                            close_modal.emit(());
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>);

                    match dom::document() {
                        Ok(document) => {
                            match document.add_event_listener_with_callback(
                                "keydown",
                                keydown_callback.as_ref().unchecked_ref(),
                            ) {
                                Ok(()) => listener = Some((document, keydown_callback)),
                                Err(err) => warn!("Could not listen for Escape: {:?}", err),
                            }
                        }
                        Err(err) => warn!("Could not listen for Escape: {}", err),
                    }
                }

                move || {
                    if let Some((document, keydown_callback)) = listener {
                        match document.remove_event_listener_with_callback(
                            "keydown",
                            keydown_callback.as_ref().unchecked_ref(),
                        ) {
                            Ok(()) => debug!("Removed modal keydown listener"),
                            Err(err) => warn!("Could not remove Escape listener: {:?}", err),
                        }
                    }
                }
            },
            is_open,
        );
    }

    let on_backdrop_click = {
        let close_modal = close_modal.clone();
        let modal_ref = modal_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let backdrop = modal_ref.get().map(EventTarget::from);
            if is_backdrop_click(e.target().as_ref(), backdrop.as_ref()) {
                close_modal.emit(());
            }
        })
    };

    html! {
        <>
            <button
                id={ids::OPEN_COMMUNITY_MODAL}
                type="button"
                class="btn btn-primary"
                onclick={open_modal}
            >
                {"Meet the Empower Community"}
            </button>
            <div
                id={ids::COMMUNITY_MODAL}
                class="modal-backdrop"
                ref={modal_ref}
                hidden={!is_open}
                onclick={on_backdrop_click}
            >
                <div
                    class="modal-dialog"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={ids::COMMUNITY_MODAL_TITLE}
                >
                    <h2 id={ids::COMMUNITY_MODAL_TITLE} tabindex="-1" ref={title_ref}>
                        {"Meet the Empower Community"}
                    </h2>
                    <p>
                        {"Our community brings together people with disabilities, designers, developers and advocates who share what they have learned about building inclusive products."}
                    </p>
                    <button
                        id={ids::CLOSE_COMMUNITY_MODAL}
                        type="button"
                        class="btn btn-secondary"
                        onclick={close_modal.reform(|_: MouseEvent| ())}
                    >
                        {"Close"}
                    </button>
                </div>
            </div>
        </>
    }
}
