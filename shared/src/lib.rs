use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub mod duration;
pub mod protocol;

pub use duration::IsoDuration;

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =========================================================
// 角色与用户 (Roles & Users)
// =========================================================

/// 用户角色
///
/// 服务端在不同接口里使用的大小写并不一致（`ADMIN` / `admin`），
/// 反序列化时统一按大小写不敏感处理，序列化时输出大写。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Guide,
    Tourist,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Guide, Role::Tourist];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Guide => "GUIDE",
            Role::Tourist => "TOURIST",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Role::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown role: {}", raw)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub role: Role,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// 用于页头问候语的名称
    pub fn display_name(&self) -> String {
        [&self.last_name, &self.first_name, &self.email]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| self.role.to_string())
    }
}

// =========================================================
// 认证 (Auth)
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// 登录响应
///
/// 部分后端版本只返回 token，用户信息需要从 token 的 claims 中恢复。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

// =========================================================
// 向导 (Guides)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub validated: bool,
    #[serde(default)]
    pub last_reservation_date: Option<NaiveDate>,
}

impl Guide {
    pub fn full_name(&self) -> String {
        let name = [&self.first_name, &self.last_name]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            format!("Guide #{}", self.id)
        } else {
            name
        }
    }
}

// =========================================================
// 徒步路线与分类 (Treks & Categories)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trek {
    pub id: i64,
    pub title: String,
    pub category_id: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration_days: Option<u32>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// 创建 / 更新徒步路线时提交的字段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrekPayload {
    pub title: String,
    pub category_id: i64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
}

impl From<&Trek> for TrekPayload {
    fn from(trek: &Trek) -> Self {
        Self {
            title: trek.title.clone(),
            category_id: trek.category_id,
            description: trek.description.clone(),
            duration_days: trek.duration_days,
            price: trek.price,
            difficulty: trek.difficulty.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =========================================================
// 活动 (Activities)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    #[default]
    Activity,
    Transportation,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Activity => "ACTIVITY",
            ActivityKind::Transportation => "TRANSPORTATION",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ACTIVITY" => Some(ActivityKind::Activity),
            "TRANSPORTATION" => Some(ActivityKind::Transportation),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    #[serde(default)]
    pub trek_id: Option<i64>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_optional: bool,
    pub activity_order: u32,
    #[serde(default)]
    pub transport_type: Option<String>,
    #[serde(default)]
    pub transport_duration: Option<String>,
}

/// 新建活动的请求体
///
/// 交通相关字段只在 `kind == Transportation` 时出现。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub description: String,
    pub is_optional: bool,
    pub activity_order: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_duration: Option<String>,
}

// =========================================================
// 预订 (Reservations)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "Pending",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Cancelled => "Cancelled",
            ReservationStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    #[serde(default)]
    pub trek_id: Option<i64>,
    #[serde(default)]
    pub trek_title: Option<String>,
    #[serde(default)]
    pub tourist_name: Option<String>,
    #[serde(default)]
    pub guide_id: Option<i64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub status: ReservationStatus,
}

// =========================================================
// 响应信封 (Envelope)
// =========================================================

/// 统一的 `{success, data|message}` 响应结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_any_case() {
        assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
        assert_eq!(Role::parse("guide"), Some(Role::Guide));
        assert_eq!(Role::parse("Tourist"), Some(Role::Tourist));
        assert_eq!(Role::parse("root"), None);

        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
        assert_eq!(serde_json::to_string(&Role::Guide).unwrap(), "\"GUIDE\"");
    }

    #[test]
    fn new_activity_omits_transport_fields_for_plain_activity() {
        let activity = NewActivity {
            title: "Hike to Base Camp".into(),
            kind: ActivityKind::Activity,
            description: "Morning hike".into(),
            is_optional: false,
            activity_order: 3,
            transport_type: None,
            transport_duration: None,
        };
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["type"], "ACTIVITY");
        assert_eq!(json["activityOrder"], 3);
        assert!(json.get("transportType").is_none());
        assert!(json.get("transportDuration").is_none());
    }

    #[test]
    fn activity_reads_camel_case_payload() {
        let activity: Activity = serde_json::from_str(
            r#"{"id":7,"trekId":2,"title":"Bus","type":"TRANSPORTATION","description":"To the trailhead",
                "isOptional":true,"activityOrder":2,"transportType":"BUS","transportDuration":"PT2H"}"#,
        )
        .unwrap();
        assert_eq!(activity.kind, ActivityKind::Transportation);
        assert_eq!(activity.activity_order, 2);
        assert_eq!(activity.transport_duration.as_deref(), Some("PT2H"));
    }

    #[test]
    fn display_name_prefers_last_name() {
        let user = User {
            id: 1,
            role: Role::Guide,
            first_name: Some("Amina".into()),
            last_name: Some("Haddad".into()),
            email: None,
        };
        assert_eq!(user.display_name(), "Haddad");

        let anonymous = User {
            last_name: None,
            first_name: None,
            ..user
        };
        assert_eq!(anonymous.display_name(), "GUIDE");
    }
}
