use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::contact::delivery::deliver;
use crate::contact::form::{ContactFormState, FormAction, FormPhase};
use crate::contact::validation::Field;

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let state = use_reducer(ContactFormState::default);

    {
        let phase = state.phase();
        let state = state.clone();
        use_effect_with_deps(
            move |phase: &FormPhase| {
                if *phase == FormPhase::Submitting {
                    let payload = state.data().clone();
                    info!("Sending contact message");
                    spawn_local(async move {
                        let result = deliver(payload).await;
                        if let Err(e) = &result {
                            error!("Form submission error: {}", e);
                        }
                        state.dispatch(FormAction::Delivered(result.is_ok()));
                    });
                }
                || ()
            },
            phase,
        );
    }

    let on_input = |field: Field| {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(FormAction::Edit(field, value)))
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(FormAction::Submit);
        })
    };

    let send_another = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(FormAction::StartOver))
    };

    if state.phase() == FormPhase::Submitted {
        return html! {
            <div class="contact-success">
                <h4>{"Message Received!"}</h4>
                <p>{"Thank you for reaching out. I'll respond within 24 hours with care and attention to your needs."}</p>
                <button class="contact-secondary-button" onclick={send_another}>
                    {"Send Another Message"}
                </button>
            </div>
        };
    }

    let submitting = state.phase() == FormPhase::Submitting;
    let field_view = |field: Field, label: &str, kind: &str, placeholder: &str| {
        let error = state.errors().get(field);
        let value = state.data().get(field).to_string();
        let class = classes!("contact-input", error.is_some().then_some("has-error"));
        let on_input = on_input(field);
        let input = if field == Field::Message {
            html! {
                <textarea
                    id={field.id()}
                    name={field.id()}
                    rows="5"
                    class={class}
                    value={value}
                    placeholder={placeholder.to_string()}
                    oninput={move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        on_input.emit(input.value());
                    }}
                />
            }
        } else {
            html! {
                <input
                    type={kind.to_string()}
                    id={field.id()}
                    name={field.id()}
                    class={class}
                    value={value}
                    placeholder={placeholder.to_string()}
                    oninput={move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        on_input.emit(input.value());
                    }}
                />
            }
        };

        html! {
            <div class="contact-field">
                <label for={field.id()}>{format!("{} *", label)}</label>
                { input }
                if let Some(error) = error {
                    <p class="contact-error">{error.to_string()}</p>
                }
            </div>
        }
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit} novalidate=true>
            { field_view(Field::Name, "Full Name", "text", "Enter your full name") }
            { field_view(Field::Email, "Email Address", "email", "Enter your email address") }
            { field_view(Field::Phone, "Phone Number", "tel", "Enter your phone number") }
            { field_view(
                Field::Message,
                "Message",
                "text",
                "Tell me a bit about what brings you here and how I can support your healing journey...",
            ) }
            <button type="submit" class="contact-submit" disabled={submitting}>
                { if submitting { "Sending with Care..." } else { "Send Message" } }
            </button>
            <p class="contact-note">
                {"* Required fields. Your information is held with complete confidentiality and care."}
            </p>
        </form>
    }
}
