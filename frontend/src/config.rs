use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// EmailJS credentials. The public key is meant to ship with the page, the
/// defaults can be replaced at build time through the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct MailRelayConfig {
    pub endpoint: &'static str,
    pub service_id: &'static str,
    pub inquiry_template_id: &'static str,
    pub acknowledgment_template_id: &'static str,
    pub public_key: &'static str,
}

pub fn mail_relay() -> MailRelayConfig {
    MailRelayConfig {
        endpoint: EMAILJS_SEND_URL,
        service_id: option_env!("RUTAKIDS_EMAILJS_SERVICE").unwrap_or("service_do1sq5q"),
        inquiry_template_id: option_env!("RUTAKIDS_EMAILJS_INQUIRY_TEMPLATE").unwrap_or("template_m1hn9fg"),
        acknowledgment_template_id: option_env!("RUTAKIDS_EMAILJS_ACK_TEMPLATE").unwrap_or("template_82sv3wp"),
        public_key: option_env!("RUTAKIDS_EMAILJS_PUBLIC_KEY").unwrap_or("8O_p0Laef3lHf_VNB"),
    }
}

pub const YOUTUBE_IFRAME_API: &str = "https://www.youtube.com/iframe_api";
pub const TEAM_VIDEO_ID: &str = "OK4mNu6CAqc";
pub const PRODUCT_VIDEO_ID: &str = "6hYBXKtwPBI";

pub const DEFAULT_MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3901.118359642551!2d-76.96548062512989!3d-12.104048942969593!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x9105c70ab77498c1%3A0xcce9f50642e7c684!2sUniversidad%20Peruana%20de%20Ciencias%20Aplicadas!5e0!3m2!1ses-419!2spe!4v1743938800464!5m2!1ses-419!2spe";
