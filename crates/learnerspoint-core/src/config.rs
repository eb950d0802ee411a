//! Site content and timing configuration.
//!
//! Everything the pages display (phrases, cards, slides, contact details) and
//! every timing constant lives in [`SiteConfig`]. The defaults are the live
//! site's content; a JSON file may override any subset of fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::card::Presentation;
use crate::error::SiteResult;
use crate::loading::LoadingTiming;
use crate::typewriter::TypewriterTiming;

/// File name looked up in the user's config directory
pub const CONTENT_FILE: &str = "site.json";

/// All site content
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: Brand,
    pub hero: HeroContent,
    pub loading: LoadingContent,
    pub services: Vec<CardEntry>,
    pub features: Vec<CardEntry>,
    pub gallery: GalleryContent,
    pub programs: Vec<Program>,
    pub enroll: EnrollContent,
    pub relay: RelaySettings,
    pub footer: FooterContent,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            hero: HeroContent::default(),
            loading: LoadingContent::default(),
            services: default_services(),
            features: default_features(),
            gallery: GalleryContent::default(),
            programs: default_programs(),
            enroll: EnrollContent::default(),
            relay: RelaySettings::default(),
            footer: FooterContent::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> SiteResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    /// Load `path` if given, else `<config_dir>/site.json` if it exists, else
    /// the built-in content. Unreadable files are logged and skipped.
    pub fn discover(path: Option<&Path>, config_dir: Option<PathBuf>) -> Self {
        let candidate = path
            .map(Path::to_path_buf)
            .or_else(|| config_dir.map(|dir| dir.join(CONTENT_FILE)).filter(|p| p.exists()));

        let Some(candidate) = candidate else {
            tracing::debug!("Using built-in site content");
            return Self::default();
        };

        match Self::load(&candidate) {
            Ok(config) => {
                tracing::info!(path = %candidate.display(), "Loaded site content");
                config
            }
            Err(e) => {
                tracing::warn!(path = %candidate.display(), error = %e, "Falling back to built-in site content");
                Self::default()
            }
        }
    }
}

/// Business identity and contact details
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub primary_email: String,
    pub secondary_email: String,
    pub directions_url: String,
    pub logo: String,
}

impl Default for Brand {
    fn default() -> Self {
        Self {
            name: "Learner's Point".to_string(),
            tagline: "Transforming Education".to_string(),
            city: "Lucknow".to_string(),
            address: "Learners Point Coaching Centre, Lucknow, Uttar Pradesh".to_string(),
            phone: "+91 98765 43210".to_string(),
            primary_email: "learnerspoint202@gmail.com".to_string(),
            secondary_email: "sidd62601@gmail.com".to_string(),
            directions_url: "https://goo.gl/maps/cF5Z2W8X9JZ2QUuw9".to_string(),
            logo: "assets/hero1.jpg".to_string(),
        }
    }
}

/// Hero banner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub heading: String,
    pub phrases: Vec<String>,
    pub timing: TypewriterTiming,
    pub blurb: String,
    pub image: String,
    pub stats: Vec<Stat>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            heading: "Unlock Your Potential With Expert Coaching".to_string(),
            phrases: strings(&[
                "Welcome to Learner Point",
                "Empower your study experience",
                "Experience Expert Tutors",
                "Welcoming and Friendly Environment",
            ]),
            timing: TypewriterTiming::default(),
            blurb: "Achieve academic excellence with our personalized coaching, expert tutors, \
                    and a friendly learning environment that adapts to your unique learning style."
                .to_string(),
            image: "assets/brn.png".to_string(),
            stats: vec![
                Stat::new("500+", "Students"),
                Stat::new("20+", "Expert Tutors"),
                Stat::new("95%", "Success Rate"),
            ],
        }
    }
}

/// Label/value pair shown in stat strips
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Loading screen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingContent {
    pub messages: Vec<String>,
    pub timing: LoadingTiming,
}

impl Default for LoadingContent {
    fn default() -> Self {
        Self {
            messages: strings(&[
                "Preparing your learning journey...",
                "Gathering educational resources...",
                "Setting up your personalized experience...",
                "Almost there! Knowledge awaits...",
            ]),
            timing: LoadingTiming::default(),
        }
    }
}

/// A service or feature card
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardEntry {
    pub title: String,
    pub summary: String,
    pub details: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub presentation: Presentation,
}

impl CardEntry {
    fn new(title: &str, summary: &str, details: &str, presentation: Presentation) -> Self {
        Self {
            title: title.to_string(),
            summary: summary.to_string(),
            details: details.to_string(),
            image: None,
            presentation,
        }
    }

    fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }
}

/// One carousel slide
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub image: String,
    pub alt: String,
    pub caption: String,
    pub description: String,
}

/// Monthly score/engagement bar pair
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    pub month: String,
    pub avg_score: u8,
    pub engagement: u8,
}

/// Gallery section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryContent {
    pub slides: Vec<Slide>,
    pub autoplay_ms: u64,
    pub headline_words: Vec<String>,
    pub headline_ms: u64,
    pub stats: Vec<Stat>,
    pub progress: Vec<ProgressPoint>,
}

impl Default for GalleryContent {
    fn default() -> Self {
        let slide = |n: u8, alt: &str, caption: &str, description: &str| Slide {
            image: format!("assets/slide_image_{n}.webp"),
            alt: alt.to_string(),
            caption: caption.to_string(),
            description: description.to_string(),
        };
        let point = |month: &str, avg_score: u8, engagement: u8| ProgressPoint {
            month: month.to_string(),
            avg_score,
            engagement,
        };
        Self {
            slides: vec![
                slide(1, "Students collaborating in a modern classroom", "Collaborative Learning Environments",
                    "Our modern classrooms foster teamwork and creative problem-solving through collaborative activities."),
                slide(2, "Science laboratory with students conducting experiments", "Hands-on Science Education",
                    "Students gain practical experience through experimental learning in our fully-equipped laboratories."),
                slide(3, "Digital library with students using tablets", "Digital Learning Resources",
                    "Our comprehensive digital library provides students with access to thousands of educational resources."),
                slide(4, "Outdoor learning environment with students", "Nature-Based Learning",
                    "We believe in the power of outdoor education to inspire curiosity and environmental stewardship."),
                slide(5, "Virtual reality classroom experience", "Immersive Learning Technology",
                    "Virtual reality tools allow students to explore historical sites, biological systems, and scientific concepts."),
                slide(6, "Students presenting in front of class", "Public Speaking & Presentation Skills",
                    "We prioritize developing confident communicators through regular presentation opportunities."),
            ],
            autoplay_ms: 5000,
            headline_words: strings(&["Interactive", "Inspiring", "Innovative", "Inclusive"]),
            headline_ms: 2000,
            stats: vec![
                Stat::new("94%", "Student Success Rate"),
                Stat::new("87%", "Faculty with PhDs"),
                Stat::new("12:1", "Student-Teacher Ratio"),
                Stat::new("96%", "Graduate Employment"),
            ],
            progress: vec![
                point("Jan", 68, 65),
                point("Feb", 72, 68),
                point("Mar", 75, 72),
                point("Apr", 79, 75),
                point("May", 82, 80),
                point("Jun", 87, 85),
            ],
        }
    }
}

/// Coaching program card in the contact section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub title: String,
    pub subtitle: String,
    pub duration: String,
    pub description: String,
}

/// Enroll page: campus map and payment details
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollContent {
    pub heading: String,
    pub intro: String,
    pub map_embed_url: String,
    pub campus_blurb: String,
    pub upi_id: String,
    pub qr_image: String,
    pub amount: String,
}

impl Default for EnrollContent {
    fn default() -> Self {
        Self {
            heading: "Start Your Learning Adventure".to_string(),
            intro: "Join Learner's Point and unlock your potential with our expert-led courses \
                    and supportive community."
                .to_string(),
            map_embed_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3561.9437034498296!2d81.0194626!3d26.7780644!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x399be5a529661bf1%3A0x9de7841609b8b44!2sLearners%20Point%20Coaching%20Centre!5e0!3m2!1sen!2sin!4v1746599103271!5m2!1sen!2sin".to_string(),
            campus_blurb: "Experience our modern learning environment and connect with our \
                           passionate educators at Learner's Point, Lucknow."
                .to_string(),
            upi_id: "aishwaryagupta62601@okicici".to_string(),
            qr_image: "assets/QR.jpg".to_string(),
            amount: "$199".to_string(),
        }
    }
}

/// Mail relay used by the forms
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelaySettings {
    /// Relay base URL
    pub endpoint: String,
    /// Address the relay forwards submissions to
    pub destination: String,
    /// How long the confirmation banner stays up
    pub banner_ms: u64,
}

impl Default for RelaySettings {
    fn default() -> Self {
        Self {
            endpoint: "https://formsubmit.co".to_string(),
            destination: "aishwaryagupta62601@gmail.com".to_string(),
            banner_ms: 5000,
        }
    }
}

/// Footer section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterContent {
    pub programs: Vec<String>,
    pub events: Vec<Event>,
    pub newsletter_ms: u64,
}

/// Upcoming event listing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub date: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            programs: strings(&[
                "Elementary Education (Classes 1-5)",
                "Middle School Excellence (Classes 6-8)",
                "High School Preparation (Classes 9-10)",
                "College Readiness (Classes 11-12)",
                "Competitive Exam Coaching",
            ]),
            events: vec![
                Event {
                    title: "Summer Learning Camp 2025".to_string(),
                    date: "June 15-30, 2025".to_string(),
                },
                Event {
                    title: "Parent-Teacher Conference".to_string(),
                    date: "May 20, 2025".to_string(),
                },
            ],
            newsletter_ms: 3000,
        }
    }
}

/// Default service cards
pub fn default_services() -> Vec<CardEntry> {
    vec![
        CardEntry::new("Weekly Tests", "Regular assessments to track your progress",
            "Our weekly tests are designed to help students gauge their understanding of concepts taught during the week. These assessments provide immediate feedback, identify areas for improvement, and help build confidence through regular practice. Tests are structured to match board examination patterns, ensuring students are well-prepared for their final exams.",
            Presentation::Zoom),
        CardEntry::new("Regular Assignment", "Practical work to reinforce classroom learning",
            "Assignments are carefully crafted to reinforce concepts learned in class. They include a mix of theoretical questions and practical problems that encourage critical thinking and application of knowledge. Our assignments are designed to be challenging yet achievable.",
            Presentation::Rotate),
        CardEntry::new("Doubt Solving", "Get your questions answered by experts",
            "Our dedicated doubt-solving sessions provide students with opportunities to clarify concepts they find challenging. Experienced teachers are available to address questions in detail, using alternative explanations and examples to ensure complete understanding.",
            Presentation::Slide),
        CardEntry::new("Friendly Environment", "Learn in a supportive, positive atmosphere",
            "We believe learning thrives in a positive environment. Our classrooms foster mutual respect, encouragement, and collaboration. Teachers create a space where students feel comfortable asking questions and expressing their thoughts.",
            Presentation::Morph),
        CardEntry::new("Individual Attention", "Personalized focus on your learning needs",
            "We maintain small batch sizes to ensure each student receives personalized attention. Our teachers identify individual learning styles and adapt their teaching methods accordingly. We also offer one-on-one sessions for students who require additional help.",
            Presentation::Zoom),
        CardEntry::new("CBSE/ICSE Board", "Curriculum aligned with board requirements",
            "Our curriculum is meticulously aligned with CBSE and ICSE board requirements. We stay updated with the latest syllabus changes and examination patterns, and our study materials are designed for the unique requirements of each board.",
            Presentation::Rotate),
    ]
}

/// Default feature cards
pub fn default_features() -> Vec<CardEntry> {
    vec![
        CardEntry::new("Expert Tutors", "Learn from experienced and qualified tutors across various subjects.",
            "Our expert tutors bring years of teaching experience and subject mastery to help you succeed academically. Whether it's math, science, language, or test prep, our tutors are committed to personalized learning and student success.",
            Presentation::Zoom).with_image("assets/teach.jpg"),
        CardEntry::new("Small Batches", "Get individual attention in small, focused student groups.",
            "We believe in quality over quantity. Our small batch sizes ensure every student receives personalized attention, active participation, and a more interactive learning experience.",
            Presentation::Rotate).with_image("assets/small.jpg"),
        CardEntry::new("Progress Tracking", "Stay updated with real-time performance insights and learning milestones.",
            "Our platform provides detailed progress tracking so students and parents can monitor learning outcomes effectively. From assignment completion to quiz scores and participation, every milestone is recorded to ensure consistent improvement.",
            Presentation::Slide).with_image("assets/track.jpg"),
        CardEntry::new("Study Materials", "Access high-quality notes, practice papers, and reference materials anytime.",
            "We provide a wide range of well-organized study materials tailored to each subject and academic level. From detailed notes and solved examples to mock tests and revision guides, all materials are available digitally.",
            Presentation::Morph).with_image("assets/material.jpg"),
    ]
}

/// Default coaching programs
pub fn default_programs() -> Vec<Program> {
    let program = |title: &str, subtitle: &str, duration: &str, description: &str| Program {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        duration: duration.to_string(),
        description: description.to_string(),
    };
    vec![
        program("Engineering Entrance Preparation", "JEE Main & Advanced", "1-2 Year Programs",
            "Comprehensive preparation for engineering entrance exams with focus on Physics, Chemistry, and Mathematics. Our specialized coaching includes regular mock tests, personalized feedback, and proven strategies to crack the JEE."),
        program("CBSE/ICSE Boards preparation", "Advanced Preparation", "Flexible Duration Programs",
            "Clear, structured teaching tailored to the CBSE and ICSE syllabus, making complex topics easier to grasp and building strong academic confidence."),
        program("Focusing All Subjects", "Math, Science and English", "Flexible Duration Programs",
            "Expert coaching in Math, Science, and English for both CBSE and ICSE students: problem-solving in Math, real-life examples in Science, and grammar, vocabulary and writing in English."),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_complete() {
        let config = SiteConfig::default();
        assert_eq!(config.hero.phrases.len(), 4);
        assert_eq!(config.loading.messages.len(), 4);
        assert_eq!(config.services.len(), 6);
        assert_eq!(config.features.len(), 4);
        assert_eq!(config.gallery.slides.len(), 6);
        assert_eq!(config.programs.len(), 3);
        assert_eq!(config.relay.banner_ms, 5000);
        assert_eq!(config.enroll.upi_id, "aishwaryagupta62601@okicici");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SiteConfig::from_json(
            r#"{ "hero": { "phrases": ["Hello"] }, "relay": { "destination": "me@example.com" } }"#,
        )
        .unwrap();
        assert_eq!(config.hero.phrases, vec!["Hello".to_string()]);
        assert_eq!(config.hero.timing, TypewriterTiming::default());
        assert_eq!(config.relay.destination, "me@example.com");
        assert_eq!(config.relay.endpoint, "https://formsubmit.co");
        assert_eq!(config.brand.name, "Learner's Point");
    }

    #[test]
    fn partial_json_keeps_default_cards() {
        let config = SiteConfig::from_json(r#"{ "brand": { "city": "Kanpur" } }"#).unwrap();
        assert_eq!(config.brand.city, "Kanpur");
        assert_eq!(config.services.len(), 6);
        assert_eq!(config.features.len(), 4);
    }

    #[test]
    fn card_presentation_defaults_to_zoom() {
        let entry: CardEntry = serde_json::from_str(
            r#"{ "title": "T", "summary": "S", "details": "D" }"#,
        )
        .unwrap();
        assert_eq!(entry.presentation, Presentation::Zoom);
        assert!(entry.image.is_none());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{ \"hero\": ").is_err());
    }
}
