pub mod admindtos;
pub mod balancedtos;
pub mod jobdtos;
