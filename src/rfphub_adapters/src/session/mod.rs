pub mod resolver;

pub use resolver::{
    ResolvedSession, SessionError, SessionResolver, create_removal_cookie, create_session_cookie,
};
