pub mod event;

/// Interest checkboxes a volunteer or senior ticks during onboarding.
/// Unchecked is a valid answer, so every flag defaults to false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterestFlags {
    pub gardening: bool,
    pub literature: bool,
    pub visual_arts: bool,
    pub music: bool,
    pub fitness: bool,
}

/// Big Five trait averages on the questionnaire's 1-5 agreement scale,
/// already aggregated per trait by the client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonalityScores {
    pub agreeableness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub neuroticism: f64,
    pub openness_to_experience: f64,
}
