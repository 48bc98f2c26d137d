pub mod contest_handler;

pub use contest_handler::{
    __path_add_contest, __path_append_comment, __path_approve_contest, __path_delete_contest,
    __path_get_contest_by_id, __path_list_contests, __path_list_created_contests,
    __path_search_contests, __path_update_participant_count, add_contest, append_comment,
    approve_contest, delete_contest, get_contest_by_id, list_contests, list_created_contests,
    search_contests, update_participant_count,
};
