//! One page per card step.

mod apology;
mod intro;
mod reunion;
mod voucher;

pub use apology::ApologyStep;
pub use intro::IntroStep;
pub use reunion::ReunionStep;
pub use voucher::VoucherStep;
