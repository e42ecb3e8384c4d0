mod category;
mod stats;
mod topic;
mod user;
