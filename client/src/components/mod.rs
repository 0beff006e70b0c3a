//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component renders one region of the landing page from plain props;
//! none of them read context or hold reactive state.

pub mod about_section;
pub mod contact_section;
pub mod hero;
pub mod icon;
pub mod publication_card;
pub mod publications_grid;
pub mod site_footer;
pub mod site_header;
