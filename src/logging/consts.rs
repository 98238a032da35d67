pub const DEFAULT_LOG_DIRECTIVE: &str = "treewalk_api=info,tower_http=info";

pub const DEFAULT_CLIENT_IP: &str = "127.0.0.1";
