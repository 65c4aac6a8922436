//! Static page content. Nothing here is computed.

use crate::types::RiskLevel;
use std::str::FromStr;

pub const APP_NAME: &str = "Health360";
pub const PAGE_TITLE: &str = "Heart Disease Prediction";
pub const PAGE_ICON: &str = "❤️";
pub const FOOTER: &str = "Health360 Web App";
pub const MENU_TITLE: &str = "Menu";
pub const MENU_PROMPT: &str = "Choose an Option";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    About,
    Prediction,
}

impl View {
    /// Menu order
    pub const ALL: [View; 3] = [View::Home, View::About, View::Prediction];

    pub fn slug(self) -> &'static str {
        match self {
            View::Home => "home",
            View::About => "about",
            View::Prediction => "predict",
        }
    }

    pub fn menu_label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::About => "About",
            View::Prediction => "Heart Disease Prediction",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Welcome to Health360",
            View::About => "About Health360",
            View::Prediction => "Heart Disease Risk Prediction",
        }
    }

    /// Paragraphs shown under the title. Markdown-style `**bold**` and
    /// `[text](url)` are the only markup used.
    pub fn body(self) -> &'static [&'static str] {
        match self {
            View::Home => &[
                "**Health360** is an AI-powered platform that helps you predict heart disease risk.",
                "Enter your health data and get predictions on the likelihood of heart disease.",
            ],
            View::About => &[
                "**Health360** uses machine learning models to analyze health data and predict the risk of heart disease.",
                "Developed by **Gurjap Singh** (Age: 17), a passionate AI enthusiast and developer.",
                "[Visit LinkedIn Profile](https://www.linkedin.com/in/gurjapsingh/)",
            ],
            View::Prediction => &[],
        }
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.slug() == s || view.menu_label() == s)
            .ok_or_else(|| format!("unknown view: {}", s))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Recommendation {
    pub banner: &'static str,
    pub accent: &'static str,
    pub heading: &'static str,
    pub tips: &'static [&'static str],
    pub image_url: &'static str,
}

pub const HIGH_RISK: Recommendation = Recommendation {
    banner: "❤️ High Risk of Heart Disease",
    accent: "red",
    heading: "Recommendations & Prevention:",
    tips: &[
        "**Consult a healthcare provider** for further testing and consultation.",
        "**Regular Exercise**: Aim for at least 150 minutes of moderate aerobic activity per week.",
        "**Healthy Diet**: Focus on a diet rich in fruits, vegetables, and whole grains. Limit saturated fats and salt.",
        "**Quit Smoking**: Smoking is a major risk factor for heart disease. Seek support to quit.",
        "**Manage Stress**: Practice stress-relieving techniques such as yoga or meditation.",
        "**Control Blood Pressure**: Regularly monitor and manage your blood pressure.",
    ],
    image_url: "https://www.seekpng.com/png/full/22-224170_heart-attack-warning-sign-heart-attack-icon-red.png",
};

pub const LOW_RISK: Recommendation = Recommendation {
    banner: "💚 Low Risk of Heart Disease",
    accent: "green",
    heading: "Prevention Tips:",
    tips: &[
        "**Maintain a healthy lifestyle** by eating nutritious food and exercising regularly.",
        "**Stay active**: Engage in physical activities like walking, swimming, or biking.",
        "**Monitor your health**: Regular checkups can catch any early signs of health issues.",
        "**Avoid excessive alcohol consumption** and smoking.",
        "**Sleep well**: Ensure you get 7-9 hours of quality sleep each night.",
        "**Manage stress**: Practice relaxation techniques like deep breathing, meditation, or yoga.",
    ],
    image_url: "https://www.seekpng.com/png/full/20-204157_healthy-heart-healthy-heart-icon.png",
};

pub const IMAGE_WIDTH: u32 = 150;

impl Recommendation {
    pub fn for_risk(risk: RiskLevel) -> &'static Recommendation {
        match risk {
            RiskLevel::High => &HIGH_RISK,
            RiskLevel::Low => &LOW_RISK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_slugs_parse() {
        for view in View::ALL {
            assert_eq!(view.slug().parse::<View>().unwrap(), view);
            assert_eq!(view.menu_label().parse::<View>().unwrap(), view);
        }
        assert!("settings".parse::<View>().is_err());
    }

    #[test]
    fn test_recommendations_keyed_by_risk() {
        assert_eq!(Recommendation::for_risk(RiskLevel::High).accent, "red");
        assert_eq!(Recommendation::for_risk(RiskLevel::Low).accent, "green");
        assert_eq!(HIGH_RISK.tips.len(), 6);
        assert_eq!(LOW_RISK.tips.len(), 6);
    }
}
