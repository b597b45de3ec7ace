mod show_change_hunk_for_substituted_token;
mod show_delete_and_add_hunks;
mod show_diff_through_external_program;
mod show_identical_output_for_optimizer_flags;
