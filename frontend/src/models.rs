use qa_board_shared::{Tag, User};

// =============== Mock 数据 ===============

/// 返回 8 个标签，其中两个名称超过 13 个字符，用于验证截断。
pub fn get_mock_tags() -> Vec<Tag> {
    [
        ("rust", 412),
        ("javascript-framework-x", 42),
        ("webassembly", 97),
        ("graphql", 75),
        ("async-await", 61),
        ("borrow-checker-errors", 38),
        ("yew", 24),
        ("serde", 19),
    ]
    .into_iter()
    .map(|(name, usage_count)| Tag {
        name: name.to_string(),
        usage_count,
    })
    .collect()
}

/// 返回 10 位用户，按声望从高到低，部分没有头像。
pub fn get_mock_users() -> Vec<User> {
    let names = [
        "ferris", "corro", "bjorn", "alice", "bob", "carol", "dave", "erin", "frank", "grace",
    ];

    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let rank = i as u64;
            User {
                id: format!("user-{:02}", i + 1),
                username: name.to_string(),
                avatar_url: if i % 3 == 0 {
                    None
                } else {
                    Some(crate::config::asset_path(&format!("static/avatar-{}.png", i % 5 + 1)))
                },
                reputation: 5000 - (i as i64) * 420,
                total_questions: 40 - rank * 3,
                total_answers: 180 - rank * 15,
            }
        })
        .collect()
}
