pub mod prompt_policy;
