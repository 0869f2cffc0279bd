use garde::Validate;
use kernel::model::{
    id::UserId,
    questionnaire::{
        event::{RegisterInterests, RegisterPersonality},
        InterestFlags, PersonalityScores,
    },
};
use serde::Deserialize;

/// Leaving every box unchecked is a valid submission, so absent fields
/// default to false.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterestsRequest {
    #[serde(default)]
    pub gardening: bool,
    #[serde(default)]
    pub literature: bool,
    #[serde(default)]
    pub visual_arts: bool,
    #[serde(default)]
    pub music: bool,
    #[serde(default)]
    pub fitness: bool,
}

impl UpdateInterestsRequest {
    pub fn into_event(self, user_id: UserId) -> RegisterInterests {
        let UpdateInterestsRequest {
            gardening,
            literature,
            visual_arts,
            music,
            fitness,
        } = self;
        RegisterInterests::new(
            user_id,
            InterestFlags {
                gardening,
                literature,
                visual_arts,
                music,
                fitness,
            },
        )
    }
}

/// Trait averages stay on the questionnaire's 1-5 agreement scale.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonalityRequest {
    #[garde(range(min = 1.0, max = 5.0))]
    pub agreeableness: f64,
    #[garde(range(min = 1.0, max = 5.0))]
    pub conscientiousness: f64,
    #[garde(range(min = 1.0, max = 5.0))]
    pub extraversion: f64,
    #[garde(range(min = 1.0, max = 5.0))]
    pub neuroticism: f64,
    #[garde(range(min = 1.0, max = 5.0))]
    pub openness_to_experience: f64,
}

impl UpdatePersonalityRequest {
    pub fn into_event(self, user_id: UserId) -> RegisterPersonality {
        let UpdatePersonalityRequest {
            agreeableness,
            conscientiousness,
            extraversion,
            neuroticism,
            openness_to_experience,
        } = self;
        RegisterPersonality::new(
            user_id,
            PersonalityScores {
                agreeableness,
                conscientiousness,
                extraversion,
                neuroticism,
                openness_to_experience,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecked_interests_default_to_false() {
        let req: UpdateInterestsRequest =
            serde_json::from_str(r#"{"music":true}"#).unwrap();
        let event = req.into_event(UserId::new());
        assert!(event.interests.music);
        assert!(!event.interests.gardening);
        assert!(!event.interests.fitness);
    }

    #[test]
    fn trait_scores_outside_the_scale_fail_validation() {
        let req: UpdatePersonalityRequest = serde_json::from_str(
            r#"{
                "agreeableness": 5.5,
                "conscientiousness": 3.0,
                "extraversion": 3.0,
                "neuroticism": 3.0,
                "opennessToExperience": 3.0
            }"#,
        )
        .unwrap();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn trait_scores_at_the_scale_bounds_are_accepted() {
        let req: UpdatePersonalityRequest = serde_json::from_str(
            r#"{
                "agreeableness": 1.0,
                "conscientiousness": 5.0,
                "extraversion": 2.4,
                "neuroticism": 3.8,
                "opennessToExperience": 4.2
            }"#,
        )
        .unwrap();
        assert!(req.validate(&()).is_ok());
    }
}
