use gloo_net::http::Request;
use serde::Serialize;

use super::error::ContactError;
use super::form::ContactForm;
use crate::config::{self, MailRelayConfig};
use crate::location::reference::ReferenceData;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Template {
    /// Full inquiry, delivered to the sales inbox.
    Inquiry,
    /// Confirmation mailed back to the visitor.
    Acknowledgment,
}

#[allow(async_fn_in_trait)]
pub trait MailRelay {
    async fn send<P: Serialize>(&self, template: Template, params: &P) -> Result<(), ContactError>;
}

#[derive(Serialize)]
struct EmailJsRequest<'a, P: Serialize> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a P,
}

/// EmailJS REST client.
pub struct EmailJs {
    config: MailRelayConfig,
}

impl EmailJs {
    pub fn new(config: MailRelayConfig) -> Self {
        Self { config }
    }

    pub fn from_config() -> Self {
        Self::new(config::mail_relay())
    }

    fn template_id(&self, template: Template) -> &'static str {
        match template {
            Template::Inquiry => self.config.inquiry_template_id,
            Template::Acknowledgment => self.config.acknowledgment_template_id,
        }
    }
}

impl MailRelay for EmailJs {
    async fn send<P: Serialize>(&self, template: Template, params: &P) -> Result<(), ContactError> {
        let body = EmailJsRequest {
            service_id: self.config.service_id,
            template_id: self.template_id(template),
            user_id: self.config.public_key,
            template_params: params,
        };
        let response = Request::post(self.config.endpoint)
            .json(&body)
            .map_err(|e| ContactError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            log::error!("EmailJS rejected {:?} mail ({}): {}", template, status, detail);
            Err(ContactError::Relay { status })
        }
    }
}

/// Validate and deliver the form. Once the inquiry is accepted the
/// acknowledgment goes out too, but its outcome never changes the result.
pub async fn submit_inquiry<R: MailRelay>(
    relay: &R,
    form: &ContactForm,
    data: &ReferenceData,
) -> Result<(), ContactError> {
    form.validate()?;

    relay.send(Template::Inquiry, &form.inquiry(data)).await?;
    log::info!("Inquiry from {} delivered", form.school.trim());

    if let Err(e) = relay.send(Template::Acknowledgment, &form.acknowledgment()).await {
        log::warn!("Acknowledgment mail failed: {}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::error::Field;
    use crate::contact::form::Position;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeRelay {
        fail: Vec<Template>,
        sent: RefCell<Vec<(Template, serde_json::Value)>>,
    }

    impl MailRelay for FakeRelay {
        async fn send<P: Serialize>(&self, template: Template, params: &P) -> Result<(), ContactError> {
            self.sent
                .borrow_mut()
                .push((template, serde_json::to_value(params).unwrap()));
            if self.fail.contains(&template) {
                Err(ContactError::Relay { status: 500 })
            } else {
                Ok(())
            }
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            school: "Colegio Fleming".into(),
            name: "Luis Paredes".into(),
            position: Some(Position::Transport),
            email: "luis@fleming.pe".into(),
            ..Default::default()
        }
    }

    fn templates(relay: &FakeRelay) -> Vec<Template> {
        relay.sent.borrow().iter().map(|(t, _)| *t).collect()
    }

    #[test]
    fn success_sends_inquiry_then_acknowledgment() {
        let relay = FakeRelay::default();

        let result = block_on(submit_inquiry(&relay, &form(), ReferenceData::peru()));

        assert_eq!(result, Ok(()));
        assert_eq!(templates(&relay), [Template::Inquiry, Template::Acknowledgment]);
        let sent = relay.sent.borrow();
        assert_eq!(sent[0].1["school"], "Colegio Fleming");
        assert_eq!(sent[1].1, serde_json::json!({"name": "Luis Paredes", "email": "luis@fleming.pe"}));
    }

    #[test]
    fn failed_acknowledgment_still_reports_success() {
        let relay = FakeRelay { fail: vec![Template::Acknowledgment], ..Default::default() };

        let result = block_on(submit_inquiry(&relay, &form(), ReferenceData::peru()));

        assert_eq!(result, Ok(()));
        assert_eq!(templates(&relay), [Template::Inquiry, Template::Acknowledgment]);
    }

    #[test]
    fn failed_inquiry_reports_failure_without_acknowledgment() {
        let relay = FakeRelay { fail: vec![Template::Inquiry], ..Default::default() };

        let result = block_on(submit_inquiry(&relay, &form(), ReferenceData::peru()));

        assert_eq!(result, Err(ContactError::Relay { status: 500 }));
        assert_eq!(templates(&relay), [Template::Inquiry]);
    }

    #[test]
    fn invalid_form_never_reaches_the_relay() {
        let relay = FakeRelay::default();
        let mut invalid = form();
        invalid.email = "luis".into();

        let result = block_on(submit_inquiry(&relay, &invalid, ReferenceData::peru()));

        assert_eq!(result, Err(ContactError::Invalid(Field::Email)));
        assert!(relay.sent.borrow().is_empty());
    }

    #[test]
    fn emailjs_maps_templates_to_configured_ids() {
        let relay = EmailJs::from_config();
        assert_eq!(relay.template_id(Template::Inquiry), config::mail_relay().inquiry_template_id);
        assert_eq!(relay.template_id(Template::Acknowledgment), config::mail_relay().acknowledgment_template_id);
    }

    #[test]
    fn emailjs_body_shape() {
        let params = form().acknowledgment();
        let body = EmailJsRequest {
            service_id: "service",
            template_id: "template",
            user_id: "key",
            template_params: &params,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "service_id": "service",
                "template_id": "template",
                "user_id": "key",
                "template_params": {"name": "Luis Paredes", "email": "luis@fleming.pe"}
            })
        );
    }
}
