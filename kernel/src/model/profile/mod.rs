use chrono::NaiveDate;

pub mod event;

/// Display partition of a volunteer profile. Visible to staff and to the
/// matched senior, so it carries no contact details.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub preferred_name: Option<String>,
    pub senior_home: Option<String>,
}

/// Sensitive partition of a volunteer profile, readable only by its owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrivateProfile {
    pub preferred_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub birthday: Option<NaiveDate>,
}

/// The flattened profile served to the signed-in user. Where a field exists
/// in both partitions the private value wins; a missing partition contributes
/// nothing.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProfileView {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub preferred_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub senior_home: Option<String>,
}

impl ProfileView {
    pub fn merge(public: Option<PublicProfile>, private: Option<PrivateProfile>) -> Self {
        let public = public.unwrap_or_default();
        let private = private.unwrap_or_default();
        Self {
            first_name: public.first_name,
            last_name: public.last_name,
            preferred_name: private.preferred_name.or(public.preferred_name),
            email: private.email,
            phone_number: private.phone_number,
            gender: private.gender,
            birthday: private.birthday,
            senior_home: public.senior_home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_of_two_empty_records_is_all_none() {
        let view = ProfileView::merge(None, None);
        assert_eq!(view, ProfileView::default());
    }

    #[test]
    fn merge_falls_back_to_public_value() {
        let public = PublicProfile {
            preferred_name: Some("A".into()),
            ..Default::default()
        };
        let view = ProfileView::merge(Some(public), None);
        assert_eq!(view.preferred_name.as_deref(), Some("A"));
    }

    #[test]
    fn merge_prefers_private_value() {
        let public = PublicProfile {
            preferred_name: Some("A".into()),
            ..Default::default()
        };
        let private = PrivateProfile {
            preferred_name: Some("B".into()),
            ..Default::default()
        };
        let view = ProfileView::merge(Some(public), Some(private));
        assert_eq!(view.preferred_name.as_deref(), Some("B"));
    }

    #[test]
    fn merge_keeps_partition_specific_fields() {
        let public = PublicProfile {
            first_name: Some("Jordan".into()),
            last_name: Some("Lee".into()),
            senior_home: Some("Maple Grove".into()),
            ..Default::default()
        };
        let private = PrivateProfile {
            email: Some("jordan@example.com".into()),
            phone_number: Some("5550001111".into()),
            ..Default::default()
        };
        let view = ProfileView::merge(Some(public), Some(private));
        assert_eq!(view.first_name.as_deref(), Some("Jordan"));
        assert_eq!(view.senior_home.as_deref(), Some("Maple Grove"));
        assert_eq!(view.email.as_deref(), Some("jordan@example.com"));
        assert_eq!(view.phone_number.as_deref(), Some("5550001111"));
        assert_eq!(view.gender, None);
    }
}
