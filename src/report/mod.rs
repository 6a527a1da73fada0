//! Output for the problem runner.
//!
//! ┌ [`console`] : human-readable narration written to any [`std::io::Write`]  
//! └ [`plot`]    : one comparison chart per problem, saved as PNG  

pub mod console;
pub mod plot;
