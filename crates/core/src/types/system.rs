//! User, role and menu administration types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::PageParams;

/// Back-office user as listed by `GET /api/v1/user`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListItem {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub union_id: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    /// 0 unknown, 1 male, 2 female
    #[serde(default)]
    pub gender: u8,
    #[serde(default)]
    pub birthday: String,
    /// Centimetres
    #[serde(default)]
    pub height: f64,
    /// "0" disabled, "1" enabled
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub mobile_verified: bool,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_roles: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreateBody {
    pub username: String,
    pub mobile: String,
    pub gender: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdateBody {
    pub id: u64,
    #[serde(flatten)]
    pub body: UserCreateBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleListItem {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_flag: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_menus: Option<Vec<RoleMenu>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

/// Grant of one menu action to a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleMenu {
    pub menu_id: u64,
    pub action_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSearchParams {
    #[serde(flatten)]
    pub page: PageParams,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCreateBody {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleUpdateBody {
    pub id: u64,
    #[serde(flatten)]
    pub body: RoleCreateBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermissionUpdateBody {
    pub id: u64,
    pub role_menus: Vec<RoleMenu>,
}

/// Permission button attached to a menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuAuth {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub auth_mark: String,
}

/// Display metadata of a menu entry. Keys the client does not model are kept
/// in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hide: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auth_list: Vec<MenuAuth>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Node of the menu tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRoute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(default)]
    pub meta: MenuMeta,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuRoute>,
}

impl MenuRoute {
    /// Depth-first walk yielding each node with its depth (roots are 0)
    pub fn walk(&self) -> Vec<(usize, &MenuRoute)> {
        fn visit<'a>(node: &'a MenuRoute, depth: usize, out: &mut Vec<(usize, &'a MenuRoute)>) {
            out.push((depth, node));
            for child in &node.children {
                visit(child, depth + 1, out);
            }
        }

        let mut out = Vec::new();
        visit(self, 0, &mut out);
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCreateBody {
    /// 0 for a top-level entry
    pub parent_id: u64,
    pub path: String,
    /// Component name, also the permission identifier
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_badge: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_text_badge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hide: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hide_tab: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_iframe: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_tab: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuUpdateBody {
    pub id: u64,
    #[serde(flatten)]
    pub body: MenuCreateBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuActionCreateBody {
    pub menu_id: u64,
    pub title: String,
    pub auth_mark: String,
    pub permission_codes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuActionUpdateBody {
    pub id: u64,
    #[serde(flatten)]
    pub body: MenuActionCreateBody,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_bodies_flatten_create_fields() {
        let body = RoleUpdateBody {
            id: 4,
            body: RoleCreateBody {
                name: "editor".to_string(),
                description: "Edits content".to_string(),
            },
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "id": 4, "name": "editor", "description": "Edits content" })
        );
    }

    #[test]
    fn test_menu_create_body_skips_unset_options() {
        let body = MenuCreateBody {
            parent_id: 0,
            path: "/content".to_string(),
            name: "Content".to_string(),
            title: "Content".to_string(),
            keep_alive: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "parentId": 0,
                "path": "/content",
                "name": "Content",
                "title": "Content",
                "keepAlive": true
            })
        );
    }

    #[test]
    fn test_menu_tree_keeps_unknown_meta_and_walks_depth_first() {
        let tree: Vec<MenuRoute> = serde_json::from_value(json!([
            {
                "id": 1,
                "path": "/system",
                "name": "System",
                "meta": { "title": "System", "icon": "ri:settings", "isFirstLevel": false },
                "children": [
                    {
                        "id": 2,
                        "path": "menu",
                        "meta": {
                            "title": "Menus",
                            "authList": [{ "title": "Add", "authMark": "add" }]
                        }
                    },
                    { "id": 3, "path": "role", "meta": { "title": "Roles" } }
                ]
            }
        ]))
        .unwrap();

        let root = &tree[0];
        assert_eq!(root.meta.extra.get("isFirstLevel"), Some(&json!(false)));
        assert_eq!(root.children[0].meta.auth_list[0].auth_mark, "add");

        let walked: Vec<(usize, &str)> = root
            .walk()
            .into_iter()
            .map(|(depth, node)| (depth, node.path.as_str()))
            .collect();
        assert_eq!(walked, vec![(0, "/system"), (1, "menu"), (1, "role")]);
    }

    #[test]
    fn test_user_search_params_flatten_pagination() {
        let params = UserSearchParams {
            page: PageParams::new(1, 20),
            username: Some("ann".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({ "page": 1, "size": 20, "username": "ann" })
        );
    }
}
