//! Form validation and submission
//!
//! Fields validate on blur. A field already marked invalid re-validates
//! on every input so the message clears as soon as it is fixed.

mod rules;
mod submit;
mod validate;

use std::rc::Rc;

use pagekit_runtime::{EventType, Page};

use crate::{Config, InitResult};

pub use rules::{FieldSnapshot, Rules, ValidationError};
pub use validate::{FEEDBACK_CLASS, FIELD_SELECTOR, INVALID_CLASS, clear_field, clear_form, validate_field, validate_form};

/// State shared by every form listener
pub(crate) struct FormContext {
    rules: Rules,
    config: Rc<Config>,
}

pub fn init(page: &mut Page, config: &Rc<Config>) -> InitResult {
    let forms = page.document().query_selector_all("form")?;
    if forms.is_empty() {
        tracing::debug!("No forms on page, skipping validation");
        return Ok(());
    }

    let ctx = Rc::new(FormContext {
        rules: Rules::new()?,
        config: Rc::clone(config),
    });

    for form in forms {
        for field in page.document().query_selector_all_in(form, FIELD_SELECTOR)? {
            let c = Rc::clone(&ctx);
            page.add_event_listener(field, EventType::Blur, move |page, _| {
                run_validation(page, field, &c);
            });

            let c = Rc::clone(&ctx);
            page.add_event_listener(field, EventType::Input, move |page, _| {
                if page.document().has_class(field, INVALID_CLASS) {
                    run_validation(page, field, &c);
                }
            });
        }

        let c = Rc::clone(&ctx);
        page.add_event_listener(form, EventType::Submit, move |page, event| {
            if let Err(err) = submit::on_submit(page, event, form, &c) {
                tracing::warn!("Form submission handler failed: {}", err);
            }
        });
    }

    tracing::debug!("Form validation ready");
    Ok(())
}

fn run_validation(page: &mut Page, field: pagekit_dom::NodeId, ctx: &FormContext) {
    if let Err(err) = validate_field(page, field, &ctx.rules, &ctx.config.messages) {
        tracing::warn!("Validating field {:?} failed: {}", field, err);
    }
}
