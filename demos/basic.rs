use log::error;
use sorted_list::*;

fn main() {
	env_logger::init_from_env(env_logger::Env::new().filter_or("SORTED_LIST_LOG", "info"));

	let mut list = SortedLinkedList::new();

	if let Err(err) = list.insert_all([1, 2, 3, 2, 5, 8, 4, 0, -5, -2]) {
		error!("{}", err);

		return;
	}

	println!("{}", list);
}
