use dioxus::prelude::*;

use crate::display::char_counter;
use crate::forms::{EventDraft, EventField, FieldErrors, CATEGORIES, DESCRIPTION_MAX_LEN, NAME_MAX_LEN};

/// The event inputs shared by the create and edit pages. Editing a field
/// clears its validation message.
#[component]
pub fn EventFormFields(
    draft: Signal<EventDraft>,
    errors: Signal<FieldErrors>,
    /// Called after any edit.
    on_edit: Option<EventHandler<()>>,
) -> Element {
    let mut draft = draft;
    let mut errors = errors;
    let mut update = move |field: EventField, value: String| {
        draft.write().set(field, value);
        errors.write().clear(field);
        if let Some(handler) = on_edit {
            handler.call(());
        }
    };

    let current = draft();
    let field_errors = errors();

    rsx! {
        div {
            class: "form-field",
            label { r#for: "event-name", "Event name" }
            input {
                id: "event-name",
                r#type: "text",
                maxlength: NAME_MAX_LEN as i64,
                placeholder: "Rust Meetup",
                value: current.name.clone(),
                oninput: move |evt: FormEvent| update(EventField::Name, evt.value()),
            }
            div {
                class: "field-meta",
                if let Some(msg) = field_errors.get(EventField::Name) {
                    span { class: "field-error", "{msg}" }
                }
                span { class: "counter", {char_counter(&current.name, NAME_MAX_LEN)} }
            }
        }

        div {
            class: "form-field",
            label { r#for: "event-description", "Description" }
            textarea {
                id: "event-description",
                rows: 5,
                maxlength: DESCRIPTION_MAX_LEN as i64,
                value: current.description.clone(),
                oninput: move |evt: FormEvent| update(EventField::Description, evt.value()),
            }
            div {
                class: "field-meta",
                if let Some(msg) = field_errors.get(EventField::Description) {
                    span { class: "field-error", "{msg}" }
                }
                span { class: "counter", {char_counter(&current.description, DESCRIPTION_MAX_LEN)} }
            }
        }

        div {
            class: "form-row",
            div {
                class: "form-field",
                label { r#for: "event-organizer", "Organizer" }
                input {
                    id: "event-organizer",
                    r#type: "text",
                    value: current.organizer.clone(),
                    oninput: move |evt: FormEvent| update(EventField::Organizer, evt.value()),
                }
            }
            div {
                class: "form-field",
                label { r#for: "event-location", "Location" }
                input {
                    id: "event-location",
                    r#type: "text",
                    value: current.location.clone(),
                    oninput: move |evt: FormEvent| update(EventField::Location, evt.value()),
                }
            }
        }

        div {
            class: "form-row",
            div {
                class: "form-field",
                label { r#for: "event-datetime", "Date & time" }
                input {
                    id: "event-datetime",
                    r#type: "datetime-local",
                    value: current.date_time.clone(),
                    oninput: move |evt: FormEvent| update(EventField::DateTime, evt.value()),
                }
                if let Some(msg) = field_errors.get(EventField::DateTime) {
                    span { class: "field-error", "{msg}" }
                }
            }
            div {
                class: "form-field",
                label { r#for: "event-capacity", "Capacity" }
                input {
                    id: "event-capacity",
                    r#type: "number",
                    min: 1,
                    value: current.capacity.clone(),
                    oninput: move |evt: FormEvent| update(EventField::Capacity, evt.value()),
                }
                if let Some(msg) = field_errors.get(EventField::Capacity) {
                    span { class: "field-error", "{msg}" }
                }
            }
        }

        div {
            class: "form-field",
            label { r#for: "event-category", "Category" }
            input {
                id: "event-category",
                r#type: "text",
                list: "event-categories",
                value: current.category.clone(),
                oninput: move |evt: FormEvent| update(EventField::Category, evt.value()),
            }
            datalist {
                id: "event-categories",
                for category in CATEGORIES {
                    option { key: "{category}", value: category }
                }
            }
            div {
                class: "category-tags",
                for category in CATEGORIES {
                    button {
                        key: "{category}",
                        r#type: "button",
                        class: if current.category == category { "tag tag-active" } else { "tag" },
                        onclick: move |_| update(EventField::Category, category.to_string()),
                        "{category}"
                    }
                }
            }
        }
    }
}
