pub mod composer;
pub mod post_card;
pub mod post_list;
