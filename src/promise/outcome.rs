/// The per-input settlement record collected by [`all_settled`].
///
/// One record per input promise, in input order, regardless of how the input
/// settled.
///
/// [`all_settled`]: fn.all_settled.html
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome<T, E> {
    /// The input promise fulfilled with this value.
    Fulfilled(T),
    /// The input promise rejected with this reason.
    Rejected(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the input promise fulfilled.
    pub fn is_fulfilled(&self) -> bool {
        match self {
            Outcome::Fulfilled(_) => true,
            Outcome::Rejected(_) => false,
        }
    }

    /// Returns `true` if the input promise rejected.
    pub fn is_rejected(&self) -> bool {
        !self.is_fulfilled()
    }
}
