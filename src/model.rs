use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub website: String,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Body of a `POST /posts`; the remote assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// Body of a `PUT /posts/{id}`. Unset fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_uses_camel_case_user_id() {
        let post: Post = serde_json::from_str(
            r#"{"userId": 5, "id": 1, "title": "Hello World", "body": "intro text"}"#,
        )
        .unwrap();
        assert_eq!(post.user_id, 5);
        assert_eq!(post.title, "Hello World");
    }

    #[test]
    fn user_parses_nested_company_and_ignores_extra_fields() {
        let user: User = serde_json::from_str(
            r#"{
  "id": 1,
  "name": "Leanne Graham",
  "username": "Bret",
  "email": "Sincere@april.biz",
  "address": {"street": "Kulas Light", "city": "Gwenborough"},
  "phone": "1-770-736-8031 x56442",
  "website": "hildegard.org",
  "company": {
    "name": "Romaguera-Crona",
    "catchPhrase": "Multi-layered client-server neural-net",
    "bs": "harness real-time e-markets"
  }
}"#,
        )
        .unwrap();
        assert_eq!(user.username, "Bret");
        assert_eq!(user.company.catch_phrase, "Multi-layered client-server neural-net");
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let res = serde_json::from_str::<Post>(r#"{"id": 1, "title": "no body"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn patch_omits_unset_fields() {
        let patch = PostPatch {
            title: Some("new".to_string()),
            ..PostPatch::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"title":"new"}"#);
    }
}
