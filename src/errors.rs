// Access control
pub const ERR_NOT_OWNER: &str = "Caller is not the owner";

// Configuration
pub const ERR_INVALID_STAKE: &str = "Vote stake must be positive";
pub const ERR_INVALID_COMMISSION: &str = "Commission percent must not exceed 100";

// Contest creation
pub const ERR_EMPTY_TITLE: &str = "Title must not be empty";
pub const ERR_EMPTY_CANDIDATES: &str = "Candidates must not be empty";
pub const ERR_TOO_MANY_CANDIDATES: &str = "Too many candidates";
pub const ERR_DUPLICATE_CANDIDATE: &str = "Duplicate candidate";
pub const ERR_INVALID_DURATION: &str = "Invalid duration";

// Voting
pub const ERR_CONTEST_NOT_FOUND: &str = "Contest not found";
pub const ERR_CANDIDATE_NOT_FOUND: &str = "Candidate not found";
pub const ERR_INCORRECT_STAKE: &str = "Incorrect stake amount";
pub const ERR_VOTE_ALREADY_CAST: &str = "Vote already cast";

// Closing
pub const ERR_ALREADY_FINISHED: &str = "Voting has already ended";
pub const ERR_TOO_EARLY: &str = "Too early to finish voting";
pub const ERR_NO_VOTES_CAST: &str = "No votes cast";

// Payouts
pub const ERR_NOT_FINISHED: &str = "Voting hasn't ended yet";
pub const ERR_REWARD_ALREADY_PAID: &str = "Reward already paid";
pub const ERR_NOT_WINNER: &str = "Caller is not the winner";
