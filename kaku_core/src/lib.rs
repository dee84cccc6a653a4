#![no_std]

pub mod frame;

//

mod rigeneric;

pub use rigeneric::*;

//

mod axpyv;

pub use axpyv::*;

//

mod her2k;

pub use her2k::*;
