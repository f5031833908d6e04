pub mod line;
pub mod stripper;
pub mod emitter {
    pub mod indent;
}
pub mod optimizer {
    pub mod jump_elimination;
    pub mod push_pop;
}
