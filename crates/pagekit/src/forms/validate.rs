//! Inline validation feedback
//!
//! A failing field gets the `is-invalid` class and a `.invalid-feedback`
//! element as its next element sibling. Feedback belongs to the field it
//! follows, so fields sharing a parent never clear each other's messages.

use pagekit_dom::{Document, NodeId};
use pagekit_runtime::Page;

use super::rules::{FieldSnapshot, Rules};
use crate::{InitResult, Messages};

pub const INVALID_CLASS: &str = "is-invalid";
pub const FEEDBACK_CLASS: &str = "invalid-feedback";

/// Controls validated inside a form
pub const FIELD_SELECTOR: &str = "input, select, textarea";

/// Validate one field and update its markers; true when valid
pub fn validate_field(page: &mut Page, field: NodeId, rules: &Rules, messages: &Messages) -> InitResult<bool> {
    let snapshot = FieldSnapshot::capture(page.document(), field);
    let error = rules.check(&snapshot);

    let doc = page.document_mut();
    clear_field(doc, field);

    let Some(error) = error else {
        return Ok(true);
    };
    tracing::debug!("Field {:?} ({}) invalid: {:?}", field, snapshot.id, error);

    doc.add_class(field, INVALID_CLASS);
    let feedback = doc.tree_mut().create_element("div");
    doc.set_attr(feedback, "class", FEEDBACK_CLASS);
    doc.tree_mut().set_text_content(feedback, error.message(messages))?;
    doc.tree_mut().insert_after(field, feedback)?;
    Ok(false)
}

/// Validate every field of `form`; all fields are marked, not just the first
pub fn validate_form(page: &mut Page, form: NodeId, rules: &Rules, messages: &Messages) -> InitResult<bool> {
    let fields = page.document().query_selector_all_in(form, FIELD_SELECTOR)?;
    let mut valid = true;
    for field in fields {
        if !validate_field(page, field, rules, messages)? {
            valid = false;
        }
    }
    Ok(valid)
}

/// Remove the invalid marker and feedback of one field
pub fn clear_field(doc: &mut Document, field: NodeId) {
    doc.remove_class(field, INVALID_CLASS);
    if let Some(next) = doc.tree().next_element_sibling(field) {
        if doc.has_class(next, FEEDBACK_CLASS) {
            doc.tree_mut().detach(next);
        }
    }
}

/// Remove every marker and feedback node inside `form`
pub fn clear_form(doc: &mut Document, form: NodeId) -> InitResult {
    doc.remove_class(form, "was-validated");
    for field in doc.query_selector_all_in(form, &format!(".{INVALID_CLASS}"))? {
        doc.remove_class(field, INVALID_CLASS);
    }
    for feedback in doc.query_selector_all_in(form, &format!(".{FEEDBACK_CLASS}"))? {
        doc.tree_mut().detach(feedback);
    }
    Ok(())
}
