diesel::table! {
    entries (id) {
        id -> BigInt,
        created_at -> BigInt,
        updated_at -> BigInt,
        completed_at -> Nullable<BigInt>,
        text -> Text,
    }
}

diesel::table! {
    comments (id) {
        id -> BigInt,
        created_at -> BigInt,
        updated_at -> BigInt,
        entry_id -> BigInt,
        text -> Text,
    }
}

diesel::table! {
    tags (name) {
        name -> Text,
    }
}

diesel::table! {
    entry_tags (entry_id, tag_name) {
        entry_id -> BigInt,
        tag_name -> Text,
    }
}

diesel::joinable!(comments -> entries (entry_id));
diesel::joinable!(entry_tags -> entries (entry_id));
diesel::joinable!(entry_tags -> tags (tag_name));

diesel::allow_tables_to_appear_in_same_query!(entries, comments, tags, entry_tags);
