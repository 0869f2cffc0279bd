use super::{PrivateProfile, PublicProfile};
use crate::model::id::UserId;
use derive_new::new;

/// Upsert of both profile partitions in one unit of work, as performed by
/// registration and profile editing.
#[derive(new)]
pub struct UpdateProfile {
    pub user_id: UserId,
    pub public: PublicProfile,
    pub private: PrivateProfile,
}
