mod controller;

pub(crate) use controller::OpKind;
pub(crate) use controller::RoleController;
pub(crate) use controller::ServeDecision;
