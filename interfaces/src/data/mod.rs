pub mod question_list;
pub mod repeat_range;
pub mod session_token;
pub mod sign_in_message;
