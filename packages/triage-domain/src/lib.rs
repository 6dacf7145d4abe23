pub mod corpus;
pub mod question;
