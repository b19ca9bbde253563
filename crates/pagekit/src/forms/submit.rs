//! Simulated form submission
//!
//! No request is sent. A valid form disables its submit control, waits
//! out a fixed latency, thanks the user, resets, then redirects.

use std::rc::Rc;

use pagekit_dom::NodeId;
use pagekit_runtime::{Event, Page};

use super::FormContext;
use super::validate::{FIELD_SELECTOR, clear_form, validate_form};
use crate::InitResult;
use crate::toast::{self, Severity};

/// Submit button with the label nodes it had before submission
struct SavedButton {
    button: NodeId,
    label: Vec<NodeId>,
}

pub(super) fn on_submit(page: &mut Page, event: &mut Event, form: NodeId, ctx: &Rc<FormContext>) -> InitResult {
    event.prevent_default();
    event.stop_propagation();

    if !validate_form(page, form, &ctx.rules, &ctx.config.messages)? {
        if let Some(first) = page.document().query_selector_in(form, ".is-invalid")? {
            page.focus(first);
        }
        tracing::debug!("Form {:?} has invalid fields", form);
        return Ok(());
    }

    tracing::info!("Submitting form {:?}", form);
    let saved = match page.document().query_selector_in(form, r#"[type="submit"]"#)? {
        Some(button) => Some(show_sending(page, button, &ctx.config.messages.sending)?),
        None => None,
    };

    let ctx = Rc::clone(ctx);
    page.set_timeout(ctx.config.submit_latency_ms, move |page| {
        if let Err(err) = finish(page, form, saved, &ctx) {
            tracing::warn!("Finishing submission of {:?} failed: {}", form, err);
        }
    });
    Ok(())
}

/// Disable the button and swap its label for a spinner plus text
fn show_sending(page: &mut Page, button: NodeId, sending: &str) -> InitResult<SavedButton> {
    let doc = page.document_mut();
    let label = doc.tree_mut().take_children(button);
    doc.set_attr(button, "disabled", "");

    let spinner = doc.tree_mut().create_element("span");
    doc.set_attr(spinner, "class", "spinner-border spinner-border-sm me-2");
    doc.set_attr(spinner, "role", "status");
    doc.set_attr(spinner, "aria-hidden", "true");
    let text = doc.tree_mut().create_text(sending);
    doc.tree_mut().append_child(button, spinner)?;
    doc.tree_mut().append_child(button, text)?;
    Ok(SavedButton { button, label })
}

fn finish(page: &mut Page, form: NodeId, saved: Option<SavedButton>, ctx: &Rc<FormContext>) -> InitResult {
    if let Some(SavedButton { button, label }) = saved {
        let doc = page.document_mut();
        doc.remove_attr(button, "disabled");
        doc.tree_mut().take_children(button);
        for node in label {
            doc.tree_mut().append_child(button, node)?;
        }
    }

    toast::notify(page, &ctx.config, &ctx.config.messages.submit_success, Severity::Success)?;
    reset(page, form)?;

    let target = ctx.config.confirmation_url.clone();
    page.set_timeout(ctx.config.redirect_delay_ms, move |page| {
        if let Err(err) = page.navigate(&target) {
            tracing::warn!("Redirect to {:?} failed: {}", target, err);
        }
    });
    Ok(())
}

/// `form.reset()` plus removal of validation markers
fn reset(page: &mut Page, form: NodeId) -> InitResult {
    let doc = page.document_mut();
    for field in doc.query_selector_all_in(form, FIELD_SELECTOR)? {
        doc.tree_mut().reset_control(field);
    }
    clear_form(doc, form)
}
