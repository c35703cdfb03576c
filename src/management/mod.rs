mod session;

pub use session::LOGIN_TIMEOUT;
pub use session::SESSION_COOKIE;
pub use session::SessionManager;
pub use session::SessionRecord;
pub use session::session_key;
