use serde::{Deserialize, Serialize};

use super::trimmed;
use crate::api::types::{ModuleMiniDto, UserDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_name: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub token: String,
    pub roles: Vec<String>,
    pub join_date: Option<String>,
    pub modules: Vec<ModuleMini>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleMini {
    pub id: i32,
    pub code: String,
    pub name: String,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self {
            user_name: trimmed(dto.user_name),
            name: trimmed(dto.name),
            surname: trimmed(dto.surname),
            email: trimmed(dto.email),
            token: trimmed(dto.token),
            roles: dto
                .roles
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .collect(),
            join_date: dto
                .join_date
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            modules: dto
                .modules
                .unwrap_or_default()
                .into_iter()
                .map(ModuleMini::from)
                .collect(),
        }
    }
}

impl From<ModuleMiniDto> for ModuleMini {
    fn from(dto: ModuleMiniDto) -> Self {
        Self {
            id: dto.id.unwrap_or(0),
            code: trimmed(dto.code),
            name: trimmed(dto.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_from_dto_trims_and_fills_blanks() {
        let user = User::from(UserDto {
            user_name: Some("  alice ".into()),
            token: Some(" tok ".into()),
            roles: Some(vec![Some("Admin".into()), None]),
            join_date: Some("  ".into()),
            modules: Some(vec![ModuleMiniDto::default()]),
            ..UserDto::default()
        });
        assert_eq!(user.user_name, "alice");
        assert_eq!(user.token, "tok");
        assert_eq!(user.name, "");
        assert_eq!(user.roles, vec!["Admin".to_string()]);
        assert!(user.join_date.is_none());
        assert_eq!(user.modules[0].id, 0);
        assert_eq!(user.modules[0].code, "");
    }
}
