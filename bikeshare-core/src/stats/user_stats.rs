use crate::{
    error::BikeshareError,
    model::{TripDataset, TripFilter, UserType},
    stats::TripReport,
};

/// number of subscriber and customer trips. other or missing user types
/// are not counted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserTypeStats {
    pub subscribers: usize,
    pub customers: usize,
}

impl TripReport for UserTypeStats {
    fn heading() -> &'static str {
        "Calculating User Type Stats..."
    }

    fn compute(dataset: &TripDataset, _filter: &TripFilter) -> Result<Self, BikeshareError> {
        let count_of = |user_type: UserType| {
            dataset
                .iter()
                .filter(|t| t.user_type.as_ref() == Some(&user_type))
                .count()
        };
        Ok(UserTypeStats {
            subscribers: count_of(UserType::Subscriber),
            customers: count_of(UserType::Customer),
        })
    }
}

impl std::fmt::Display for UserTypeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "There are {} Subscribers and {} Customers.",
            self.subscribers, self.customers
        )
    }
}
