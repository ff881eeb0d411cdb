mod common;
pub use self::common::{PageQuery, Query, QueryCommon};

mod bill;
pub use self::bill::BillQuery;

mod news;
pub use self::news::NewsQuery;

mod mp;
pub use self::mp::MpQuery;

mod loan;
pub use self::loan::LoanQuery;
