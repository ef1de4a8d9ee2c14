use std::fmt;

#[derive(Debug, Clone)]
pub enum PageStatsError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Validation(String),
    NotFound(String),
    FileOperation(String),
}

impl PageStatsError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            PageStatsError::DatabaseConfig(_) => "E001",
            PageStatsError::DatabaseConnection(_) => "E002",
            PageStatsError::DatabaseOperation(_) => "E003",
            PageStatsError::Validation(_) => "E004",
            PageStatsError::NotFound(_) => "E005",
            PageStatsError::FileOperation(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            PageStatsError::DatabaseConfig(_) => "Database Configuration Error",
            PageStatsError::DatabaseConnection(_) => "Database Connection Error",
            PageStatsError::DatabaseOperation(_) => "Database Operation Error",
            PageStatsError::Validation(_) => "Validation Error",
            PageStatsError::NotFound(_) => "Resource Not Found",
            PageStatsError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            PageStatsError::DatabaseConfig(msg)
            | PageStatsError::DatabaseConnection(msg)
            | PageStatsError::DatabaseOperation(msg)
            | PageStatsError::Validation(msg)
            | PageStatsError::NotFound(msg)
            | PageStatsError::FileOperation(msg) => msg,
        }
    }

    /// 格式化为彩色输出（启动失败时打印到终端）
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

    pub fn is_not_found(&self) -> bool {
        matches!(self, PageStatsError::NotFound(_))
    }
}

impl fmt::Display for PageStatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PageStatsError {}

// 便捷的构造函数
impl PageStatsError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        PageStatsError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        PageStatsError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        PageStatsError::DatabaseOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        PageStatsError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        PageStatsError::NotFound(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        PageStatsError::FileOperation(msg.into())
    }
}

impl From<sea_orm::DbErr> for PageStatsError {
    fn from(err: sea_orm::DbErr) -> Self {
        PageStatsError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for PageStatsError {
    fn from(err: std::io::Error) -> Self {
        PageStatsError::FileOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PageStatsError>;
