//! [`Reservation`] read model definition.
//!
//! [`Reservation`]: crate::domain::Reservation

pub mod list {
    //! [`Reservation`]s list definitions.
    //!
    //! [`Reservation`]: crate::domain::Reservation

    use common::Limit;

    use crate::domain::user;

    /// Selector of a guest's [`Reservation`]s.
    ///
    /// [`Reservation`]: crate::domain::Reservation
    #[derive(Clone, Copy, Debug)]
    pub struct Selector {
        /// [`user::Id`] of the guest to list [`Reservation`]s of.
        ///
        /// [`Reservation`]: crate::domain::Reservation
        pub guest_id: user::Id,

        /// Maximum number of [`Reservation`]s to return.
        ///
        /// [`Reservation`]: crate::domain::Reservation
        pub limit: Limit,
    }
}
