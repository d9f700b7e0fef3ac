use crate::address::Address;

/// Membership predicate over validator operator addresses.
pub trait ValidatorWhitelist {
    fn is_whitelisted(&self, operator: &Address) -> bool;
}

impl<F> ValidatorWhitelist for F
where
    F: Fn(&Address) -> bool,
{
    fn is_whitelisted(&self, operator: &Address) -> bool {
        self(operator)
    }
}
