pub mod contact_form;
pub mod language_switcher;
pub mod project_grid;
pub mod project_modal;
pub mod skill_orbs;
pub mod skill_panel;
pub mod tab_bar;
