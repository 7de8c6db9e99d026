use serde::{Deserialize, Serialize};

/// Every selector, class name and tuning constant the page behaviours use.
///
/// `Default` carries the production values. A page can override any subset by
/// embedding `<script type="application/json" id="site-config">` with a
/// partial object; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub header: HeaderConfig,
    pub reveal: RevealConfig,
    pub contact: SectionConfig,
    pub nav: NavConfig,
    pub automations: CanvasConfig,
    pub services: ServicesConfig,
    pub form: FormConfig,
    pub parallax: ParallaxConfig,
    /// Viewports this wide or narrower count as mobile.
    pub mobile_breakpoint: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header: HeaderConfig::default(),
            reveal: RevealConfig::default(),
            contact: SectionConfig::default(),
            nav: NavConfig::default(),
            automations: CanvasConfig::default(),
            services: ServicesConfig::default(),
            form: FormConfig::default(),
            parallax: ParallaxConfig::default(),
            mobile_breakpoint: 700.0,
        }
    }
}

impl SiteConfig {
    /// Parses a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_mobile(&self, viewport_width: f64) -> bool {
        viewport_width <= self.mobile_breakpoint
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub intro: String,
    pub header: String,
    /// The header shows once the intro's bottom edge is above this line (px).
    pub offset: f64,
    pub visible_class: String,
    pub shrunk_class: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            intro: "#intro".into(),
            header: "#site-header".into(),
            offset: 40.0,
            visible_class: "visible".into(),
            shrunk_class: "intro--shrunk".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub class: String,
    pub threshold: f64,
    pub root_margin: String,
    pub stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".reveal-up, .reveal-line, .reveal-slide".into(),
            class: "revealed".into(),
            threshold: 0.15,
            root_margin: "0px 0px -40px 0px".into(),
            stagger_ms: 120,
        }
    }
}

/// One-time highlight of a whole section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    pub selector: String,
    pub class: String,
    pub threshold: f64,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            selector: "#contact".into(),
            class: "revealed-section".into(),
            threshold: 0.15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub menu_button: String,
    pub overlay: String,
    pub open_class: String,
    pub mobile_link: String,
    pub anchor_link: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            menu_button: "#menu-toggle".into(),
            overlay: "#mobile-nav-overlay".into(),
            open_class: "open".into(),
            mobile_link: ".mobile-nav__link".into(),
            anchor_link: "a[href^=\"#\"]".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub selector: String,
    pub threshold: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            selector: ".automations-canvas".into(),
            threshold: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    pub selector: String,
    pub threshold: f64,
    pub node_count: usize,
    /// Nodes closer than this are joined by a line.
    pub link_distance: f64,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            selector: ".services__node-canvas".into(),
            threshold: 0.05,
            node_count: 12,
            link_distance: 250.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub selector: String,
    pub recipient: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            selector: "#contact-form".into(),
            recipient: "hello@axionco.com".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub selector: String,
    pub base: f64,
    pub increment: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            selector: ".shape".into(),
            base: 0.02,
            increment: 0.01,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(r#"{"form":{"recipient":"ops@example.com"},"mobile_breakpoint":640}"#)
            .unwrap();
        assert_eq!(cfg.form.recipient, "ops@example.com");
        assert_eq!(cfg.form.selector, "#contact-form");
        assert_eq!(cfg.mobile_breakpoint, 640.0);
        assert_eq!(cfg.reveal, RevealConfig::default());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{not json").is_err());
    }

    #[test]
    fn breakpoint_is_inclusive() {
        let cfg = SiteConfig::default();
        assert!(cfg.is_mobile(700.0));
        assert!(cfg.is_mobile(320.0));
        assert!(!cfg.is_mobile(701.0));
    }
}
