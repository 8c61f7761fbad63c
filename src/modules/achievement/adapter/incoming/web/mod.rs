mod achievement_form;
pub mod routes;
