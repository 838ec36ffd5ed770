mod task_atomics;
mod timer;
mod vu_pool;

pub(crate) use task_atomics::TaskAtomics;
pub(crate) use timer::Timer;
pub(crate) use vu_pool::VuPool;
