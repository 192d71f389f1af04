mod countdown;
mod section;
mod staking_calculator;
mod tokenomics;
mod transfer_ticker;

pub use countdown::Countdown;
pub use section::Section;
pub use staking_calculator::StakingCalculator;
pub use tokenomics::Tokenomics;
pub use transfer_ticker::TransferTicker;
