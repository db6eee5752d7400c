// Cached compilation of regular expressions

mod cache;
