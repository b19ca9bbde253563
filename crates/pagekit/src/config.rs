//! Behavior configuration

/// Inline SVG shown in place of images that fail to load
const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 400 300\"%3E%3Crect fill=\"%23f0f0f0\" width=\"400\" height=\"300\"/%3E%3Ctext x=\"50%25\" y=\"50%25\" dominant-baseline=\"middle\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"18\" fill=\"%23999\"%3EImage%3C/text%3E%3C/svg%3E";

/// Timing, layout and text settings shared by every behavior
#[derive(Debug, Clone)]
pub struct Config {
    /// Viewport width at which an open mobile menu closes itself
    pub nav_breakpoint: f64,

    /// Resize debounce for the navigation menu (ms)
    pub resize_debounce_ms: u64,

    /// Scroll throttle for scroll-spy and scroll-to-top (ms)
    pub scroll_throttle_ms: u64,

    /// Lookahead added to the scroll offset before matching sections (px)
    pub scroll_spy_offset: f64,

    /// Navbar height used when the page has no `.navbar` (px)
    pub fallback_navbar_height: f64,

    /// Scroll offset past which the scroll-to-top button shows (px)
    pub scroll_to_top_threshold: f64,

    /// How long a toast stays up (ms)
    pub toast_display_ms: u64,

    /// Fade-out window before a dismissed toast is removed (ms)
    pub toast_fade_ms: u64,

    /// Simulated submission latency (ms)
    pub submit_latency_ms: u64,

    /// Delay between the success toast and the redirect (ms)
    pub redirect_delay_ms: u64,

    /// Where a successful submission redirects
    pub confirmation_url: String,

    /// Replacement `src` for broken images
    pub placeholder_image: String,

    pub messages: Messages,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nav_breakpoint: 768.0,
            resize_debounce_ms: 250,
            scroll_throttle_ms: 100,
            scroll_spy_offset: 100.0,
            fallback_navbar_height: 80.0,
            scroll_to_top_threshold: 300.0,
            toast_display_ms: 5000,
            toast_fade_ms: 150,
            submit_latency_ms: 1000,
            redirect_delay_ms: 1500,
            confirmation_url: "thank_you.html".to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            messages: Messages::default(),
        }
    }
}

impl Config {
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_confirmation_url(mut self, url: impl Into<String>) -> Self {
        self.confirmation_url = url.into();
        self
    }

    pub fn with_nav_breakpoint(mut self, width: f64) -> Self {
        self.nav_breakpoint = width;
        self
    }

    pub fn with_toast_timing(mut self, display_ms: u64, fade_ms: u64) -> Self {
        self.toast_display_ms = display_ms;
        self.toast_fade_ms = fade_ms;
        self
    }

    pub fn with_submit_timing(mut self, latency_ms: u64, redirect_delay_ms: u64) -> Self {
        self.submit_latency_ms = latency_ms;
        self.redirect_delay_ms = redirect_delay_ms;
        self
    }
}

/// User-visible strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub required: String,
    pub invalid_email: String,
    pub invalid_phone: String,
    pub invalid_name: String,
    pub message_too_short: String,
    pub must_agree: String,
    pub submit_success: String,
    /// Submit button label while the simulated request runs
    pub sending: String,
    pub scroll_to_top_label: String,
    pub close_label: String,
}

impl Default for Messages {
    /// The site's Latvian copy
    fn default() -> Self {
        Self {
            required: "Šis lauks ir obligāts".into(),
            invalid_email: "Lūdzu, ievadiet derīgu e-pasta adresi".into(),
            invalid_phone: "Lūdzu, ievadiet derīgu tālruņa numuru".into(),
            invalid_name: "Vārds drīkst saturēt tikai burtus (2-50 rakstzīmes)".into(),
            message_too_short: "Ziņojumam jābūt vismaz 10 rakstzīmēm".into(),
            must_agree: "Jums jāpiekrīt, lai turpinātu".into(),
            submit_success: "Paldies! Jūsu pieteikums ir saņemts.".into(),
            sending: "Sūta...".into(),
            scroll_to_top_label: "Atpakaļ uz augšu".into(),
            close_label: "Close".into(),
        }
    }
}

impl Messages {
    pub fn english() -> Self {
        Self {
            required: "This field is required".into(),
            invalid_email: "Please enter a valid email address".into(),
            invalid_phone: "Please enter a valid phone number".into(),
            invalid_name: "Name may only contain letters (2-50 characters)".into(),
            message_too_short: "Message must be at least 10 characters".into(),
            must_agree: "You must agree to continue".into(),
            submit_success: "Thank you! Your request has been received.".into(),
            sending: "Sending...".into(),
            scroll_to_top_label: "Back to top".into(),
            close_label: "Close".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.nav_breakpoint, 768.0);
        assert_eq!(config.toast_display_ms + config.toast_fade_ms, 5150);
        assert_eq!(config.confirmation_url, "thank_you.html");
        assert!(config.placeholder_image.starts_with("data:image/svg+xml,"));
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_messages(Messages::english())
            .with_confirmation_url("/thanks")
            .with_submit_timing(10, 20);

        assert_eq!(config.messages.required, "This field is required");
        assert_eq!(config.confirmation_url, "/thanks");
        assert_eq!(config.redirect_delay_ms, 20);
    }
}
