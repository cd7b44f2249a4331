use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinilinkError {
    Conflict(String),
    NotFound(String),
    KeyspaceExhausted(String),
    Validation(String),
    Config(String),
}

impl MinilinkError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            MinilinkError::Conflict(_) => "E001",
            MinilinkError::NotFound(_) => "E002",
            MinilinkError::KeyspaceExhausted(_) => "E003",
            MinilinkError::Validation(_) => "E004",
            MinilinkError::Config(_) => "E005",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            MinilinkError::Conflict(_) => "Shortcode Conflict",
            MinilinkError::NotFound(_) => "Shortcode Not Found",
            MinilinkError::KeyspaceExhausted(_) => "Keyspace Exhausted",
            MinilinkError::Validation(_) => "Validation Error",
            MinilinkError::Config(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            MinilinkError::Conflict(msg) => msg,
            MinilinkError::NotFound(msg) => msg,
            MinilinkError::KeyspaceExhausted(msg) => msg,
            MinilinkError::Validation(msg) => msg,
            MinilinkError::Config(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 Server 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for MinilinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for MinilinkError {}

// 便捷的构造函数
impl MinilinkError {
    pub fn conflict<T: Into<String>>(msg: T) -> Self {
        MinilinkError::Conflict(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        MinilinkError::NotFound(msg.into())
    }

    pub fn keyspace_exhausted<T: Into<String>>(msg: T) -> Self {
        MinilinkError::KeyspaceExhausted(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        MinilinkError::Validation(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        MinilinkError::Config(msg.into())
    }
}

impl From<toml::de::Error> for MinilinkError {
    fn from(err: toml::de::Error) -> Self {
        MinilinkError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MinilinkError>;
