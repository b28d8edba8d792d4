pub mod advertise;
pub mod earn;
pub mod new_partner_task;
pub mod new_task;
pub mod spin_wheel_page;
pub mod withdraw;
