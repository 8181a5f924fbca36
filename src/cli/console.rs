//! Menu-driven console session
//!
//! The console is a thin driver over [`Store`]: it asks for input through a
//! [`Prompter`], calls exactly one store operation per menu action and
//! renders the outcome with the `report` helpers.
//!
//! # Menus
//!
//! Each menu is a command enum with one table mapping entries to labels. The
//! entry number typed by the user indexes that table, and the selected
//! command is dispatched with a single `match`.
//!
//! | Menu      | Entries |
//! |-----------|---------|
//! | Main      | 6       |
//! | Products  | 6       |
//! | Customers | 4       |
//! | Cart      | 6       |
//! | Orders    | 5       |
//!
//! # Error Handling
//!
//! A rejected operation or a malformed answer is printed as `Error: ...` and
//! the user is returned to the current menu. End of input ends the session
//! normally; only a failing reader or writer aborts it.

use crate::core::Store;
use crate::io::prompt::{InputError, Prompter};
use crate::io::report;
use crate::types::{
    CustomerId, CustomerUpdate, NewCustomer, NewProduct, OrderStatus, ProductUpdate, StoreError,
};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, warn};

/// Failure of a single console action
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<io::Error> for ConsoleError {
    fn from(error: io::Error) -> Self {
        ConsoleError::Input(InputError::Io(error))
    }
}

/// A menu: its commands in display order, with their labels
trait Menu: Copy + 'static {
    const ENTRIES: &'static [(Self, &'static str)];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MainCommand {
    Products,
    Customers,
    Cart,
    Orders,
    Statistics,
    Exit,
}

impl Menu for MainCommand {
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (MainCommand::Products, "Manage products"),
        (MainCommand::Customers, "Manage customers"),
        (MainCommand::Cart, "Shopping cart"),
        (MainCommand::Orders, "Orders"),
        (MainCommand::Statistics, "Store statistics"),
        (MainCommand::Exit, "Exit"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogCommand {
    Add,
    ListAll,
    FindById,
    FindByCategory,
    UpdateOrDelete,
    Back,
}

impl Menu for CatalogCommand {
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (CatalogCommand::Add, "Add product"),
        (CatalogCommand::ListAll, "View all products"),
        (CatalogCommand::FindById, "Find product by ID"),
        (CatalogCommand::FindByCategory, "Search by category"),
        (CatalogCommand::UpdateOrDelete, "Update or delete product"),
        (CatalogCommand::Back, "Back to main menu"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CustomerCommand {
    Register,
    List,
    Update,
    Back,
}

impl Menu for CustomerCommand {
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (CustomerCommand::Register, "Register customer"),
        (CustomerCommand::List, "View customers"),
        (CustomerCommand::Update, "Update customer contact details"),
        (CustomerCommand::Back, "Back to main menu"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CartCommand {
    Add,
    Remove,
    View,
    Discount,
    Clear,
    Back,
}

impl Menu for CartCommand {
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (CartCommand::Add, "Add product to cart"),
        (CartCommand::Remove, "Remove product from cart"),
        (CartCommand::View, "View cart"),
        (CartCommand::Discount, "Apply discount"),
        (CartCommand::Clear, "Clear cart"),
        (CartCommand::Back, "Back to main menu"),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderCommand {
    CreateFromCart,
    ListAll,
    ListByCustomer,
    ChangeStatus,
    Back,
}

impl Menu for OrderCommand {
    const ENTRIES: &'static [(Self, &'static str)] = &[
        (OrderCommand::CreateFromCart, "Create order from cart"),
        (OrderCommand::ListAll, "View all orders"),
        (OrderCommand::ListByCustomer, "View customer orders"),
        (OrderCommand::ChangeStatus, "Change order status"),
        (OrderCommand::Back, "Back to main menu"),
    ];
}

/// Interactive session over a store
#[derive(Debug)]
pub struct Console<R, W> {
    store: Store,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(store: Store, input: R, output: W) -> Self {
        Console {
            store,
            prompter: Prompter::new(input, output),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Take back the store and the output writer
    pub fn into_parts(self) -> (Store, W) {
        (self.store, self.prompter.into_output())
    }

    /// Run the main menu until the user exits or input ends
    ///
    /// # Errors
    ///
    /// Only fails when the console itself cannot be read or written.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        match self.main_menu() {
            Err(ConsoleError::Input(InputError::Closed)) => {
                debug!("input closed, ending session");
                Ok(())
            }
            other => other,
        }
    }

    fn main_menu(&mut self) -> Result<(), ConsoleError> {
        loop {
            let title = format!("=== Online store \"{}\" ===", self.store.config().name);
            let result = match self.choose::<MainCommand>(&title)? {
                MainCommand::Products => self.catalog_menu(),
                MainCommand::Customers => self.customers_menu(),
                MainCommand::Cart => self.cart_menu(),
                MainCommand::Orders => self.orders_menu(),
                MainCommand::Statistics => self.show_statistics(),
                MainCommand::Exit => {
                    writeln!(self.prompter.output(), "Goodbye!")?;
                    return Ok(());
                }
            };
            self.settle(result)?;
        }
    }

    /// Print a menu and return the chosen command
    fn choose<M: Menu>(&mut self, title: &str) -> Result<M, InputError> {
        let out = self.prompter.output();
        writeln!(out)?;
        writeln!(out, "{}", title)?;
        for (number, (_, label)) in M::ENTRIES.iter().enumerate() {
            writeln!(out, "{}. {}", number + 1, label)?;
        }

        let choice = self.prompter.menu_choice(M::ENTRIES.len())?;
        Ok(M::ENTRIES[choice - 1].0)
    }

    /// Report a failed action and keep the session going when possible
    fn settle(&mut self, result: Result<(), ConsoleError>) -> Result<(), ConsoleError> {
        match result {
            Err(ConsoleError::Store(error)) => {
                warn!(kind = ?error.kind(), "operation rejected: {}", error);
                report::write_error(self.prompter.output(), &error)?;
                Ok(())
            }
            Err(ConsoleError::Input(error)) if error.is_recoverable() => {
                warn!("invalid input: {}", error);
                writeln!(self.prompter.output(), "Error: {}", error)?;
                Ok(())
            }
            other => other,
        }
    }

    // Products

    fn catalog_menu(&mut self) -> Result<(), ConsoleError> {
        loop {
            let result = match self.choose::<CatalogCommand>("=== Products ===")? {
                CatalogCommand::Add => self.add_product(),
                CatalogCommand::ListAll => self.list_products(),
                CatalogCommand::FindById => self.show_product(),
                CatalogCommand::FindByCategory => self.products_in_category(),
                CatalogCommand::UpdateOrDelete => self.update_or_delete_product(),
                CatalogCommand::Back => return Ok(()),
            };
            self.settle(result)?;
        }
    }

    fn add_product(&mut self) -> Result<(), ConsoleError> {
        let input = NewProduct {
            name: self.prompter.required_string("Product name")?,
            description: self
                .prompter
                .optional_string("Description")?
                .unwrap_or_default(),
            price: self.prompter.required_decimal("Price")?,
            category: self.prompter.required_string("Category")?,
            stock: self.prompter.required_int("Stock")?,
        };

        let product = self.store.add_product(input)?;
        writeln!(
            self.prompter.output(),
            "Product \"{}\" added with ID {}.",
            product.name,
            product.id
        )?;
        Ok(())
    }

    fn list_products(&mut self) -> Result<(), ConsoleError> {
        let products = self.store.catalog().list();
        let out = self.prompter.output();
        if products.is_empty() {
            writeln!(out, "Catalog is empty.")?;
            return Ok(());
        }

        writeln!(out, "--- Catalog ---")?;
        for product in products {
            report::write_product_line(out, product)?;
        }
        Ok(())
    }

    fn show_product(&mut self) -> Result<(), ConsoleError> {
        let id = self.prompter.required_id("Product ID")?;
        let product = self.store.catalog().require(id)?;
        report::write_product_detail(self.prompter.output(), product)?;
        Ok(())
    }

    fn products_in_category(&mut self) -> Result<(), ConsoleError> {
        let category = self.prompter.required_string("Category")?;
        let products = self.store.catalog().find_by_category(&category);
        let out = self.prompter.output();
        if products.is_empty() {
            writeln!(out, "No products found.")?;
            return Ok(());
        }

        writeln!(out, "--- Products in category \"{}\" ---", category)?;
        for product in products {
            report::write_product_line(out, product)?;
        }
        Ok(())
    }

    fn update_or_delete_product(&mut self) -> Result<(), ConsoleError> {
        let id = self.prompter.required_id("Product ID")?;
        self.store.catalog().require(id)?;

        let action = self
            .prompter
            .required_string("Type 'update' to edit or 'delete' to remove")?;
        match action.to_lowercase().as_str() {
            "update" => {
                writeln!(self.prompter.output(), "Leave a field blank to keep it.")?;
                let update = ProductUpdate {
                    name: self.prompter.optional_string("New name")?,
                    description: self.prompter.optional_string("New description")?,
                    category: self.prompter.optional_string("New category")?,
                    price: self.prompter.optional_decimal("New price")?,
                    stock: self.prompter.optional_int("New stock")?,
                };
                self.store.update_product(id, &update)?;
                writeln!(self.prompter.output(), "Product updated.")?;
            }
            "delete" => {
                let product = self.store.deactivate_product(id)?;
                writeln!(
                    self.prompter.output(),
                    "Product \"{}\" deleted.",
                    product.name
                )?;
            }
            _ => writeln!(self.prompter.output(), "Unknown action.")?,
        }
        Ok(())
    }

    // Customers

    fn customers_menu(&mut self) -> Result<(), ConsoleError> {
        loop {
            let result = match self.choose::<CustomerCommand>("=== Customers ===")? {
                CustomerCommand::Register => self.register_customer(),
                CustomerCommand::List => self.list_customers(),
                CustomerCommand::Update => self.update_customer(),
                CustomerCommand::Back => return Ok(()),
            };
            self.settle(result)?;
        }
    }

    fn register_customer(&mut self) -> Result<(), ConsoleError> {
        let input = NewCustomer {
            name: self.prompter.required_string("Full name")?,
            phone: self.prompter.required_string("Phone (+XXXXXXXXXXXX)")?,
            email: self.prompter.required_string("Email")?,
            address: self.prompter.required_string("Shipping address")?,
        };

        let customer = self.store.register_customer(input)?;
        writeln!(
            self.prompter.output(),
            "Customer {} registered with ID {}.",
            customer.name,
            customer.id
        )?;
        Ok(())
    }

    fn list_customers(&mut self) -> Result<(), ConsoleError> {
        let customers = self.store.customers().list();
        let out = self.prompter.output();
        if customers.is_empty() {
            writeln!(out, "No registered customers.")?;
            return Ok(());
        }

        writeln!(out, "--- Customers ---")?;
        for customer in customers {
            report::write_customer_line(out, customer)?;
        }
        Ok(())
    }

    fn update_customer(&mut self) -> Result<(), ConsoleError> {
        let id = self.prompter.required_id("Customer ID")?;
        self.store.customers().require(id)?;

        writeln!(self.prompter.output(), "Leave a field blank to keep it.")?;
        let update = CustomerUpdate {
            name: self.prompter.optional_string("New name")?,
            phone: self.prompter.optional_string("New phone")?,
            email: self.prompter.optional_string("New email")?,
            address: self.prompter.optional_string("New address")?,
        };
        self.store.update_customer(id, &update)?;
        writeln!(self.prompter.output(), "Customer details updated.")?;
        Ok(())
    }

    // Cart

    /// Ask whose cart to work on, then run the cart menu for that customer
    fn cart_menu(&mut self) -> Result<(), ConsoleError> {
        let customer = self.prompter.required_id("Customer ID")?;
        self.store.cart(customer)?;
        let title = format!("--- Cart of {} ---", self.customer_name(customer)?);

        loop {
            let result = match self.choose::<CartCommand>(&title)? {
                CartCommand::Add => self.add_to_cart(customer),
                CartCommand::Remove => self.remove_from_cart(customer),
                CartCommand::View => self.view_cart(customer),
                CartCommand::Discount => self.apply_discount(customer),
                CartCommand::Clear => self.clear_cart(customer),
                CartCommand::Back => return Ok(()),
            };
            self.settle(result)?;
        }
    }

    fn customer_name(&self, customer: CustomerId) -> Result<String, StoreError> {
        Ok(self.store.customers().require(customer)?.name.clone())
    }

    fn add_to_cart(&mut self, customer: CustomerId) -> Result<(), ConsoleError> {
        let product = self.prompter.required_id("Product ID")?;
        let quantity = self.prompter.required_int("Quantity")?;

        let cart = self.store.add_to_cart(customer, product, quantity)?;
        let name = cart
            .items
            .get(&product)
            .map(|item| item.name.as_str())
            .unwrap_or_default();
        writeln!(
            self.prompter.output(),
            "Added \"{}\" ({} pcs.) to the cart.",
            name,
            quantity
        )?;
        Ok(())
    }

    fn remove_from_cart(&mut self, customer: CustomerId) -> Result<(), ConsoleError> {
        let product = self.prompter.required_id("Product ID to remove")?;
        let item = self.store.remove_from_cart(customer, product)?;
        writeln!(
            self.prompter.output(),
            "Removed \"{}\" from the cart.",
            item.name
        )?;
        Ok(())
    }

    fn view_cart(&mut self, customer: CustomerId) -> Result<(), ConsoleError> {
        let name = self.customer_name(customer)?;
        let out = self.prompter.output();
        match self.store.carts().get(customer) {
            Some(cart) => {
                let items = cart.priced_items()?;
                let totals = cart.totals()?;
                report::write_cart(out, &name, &items, &totals)?
            }
            None => writeln!(out, "Cart is empty.")?,
        }
        Ok(())
    }

    fn apply_discount(&mut self, customer: CustomerId) -> Result<(), ConsoleError> {
        let percent = self.prompter.required_decimal("Discount percent (0-50)")?;
        self.store.apply_discount(customer, percent)?;
        writeln!(
            self.prompter.output(),
            "Discount {} applied.",
            report::format_percent(percent)
        )?;
        Ok(())
    }

    fn clear_cart(&mut self, customer: CustomerId) -> Result<(), ConsoleError> {
        self.store.clear_cart(customer)?;
        writeln!(self.prompter.output(), "Cart cleared.")?;
        Ok(())
    }

    // Orders

    fn orders_menu(&mut self) -> Result<(), ConsoleError> {
        loop {
            let result = match self.choose::<OrderCommand>("=== Orders ===")? {
                OrderCommand::CreateFromCart => self.create_order(),
                OrderCommand::ListAll => self.list_orders(),
                OrderCommand::ListByCustomer => self.customer_orders(),
                OrderCommand::ChangeStatus => self.change_order_status(),
                OrderCommand::Back => return Ok(()),
            };
            self.settle(result)?;
        }
    }

    /// Show the quote, ask for confirmation and place the order
    fn create_order(&mut self) -> Result<(), ConsoleError> {
        let customer = self.prompter.required_id("Customer ID")?;

        let prompter = &mut self.prompter;
        let mut input_failure = None;
        let created = self.store.create_order_from_cart(customer, |quote| {
            report::write_quote(prompter.output(), quote)
                .map_err(InputError::from)
                .and_then(|()| prompter.confirm("Confirm order?"))
                .unwrap_or_else(|error| {
                    input_failure = Some(error);
                    false
                })
        })?;
        if let Some(error) = input_failure {
            return Err(error.into());
        }

        match created {
            Some(order) => writeln!(
                prompter.output(),
                "Order #{} created. Status: {}",
                order.id,
                order.status
            )?,
            None => writeln!(prompter.output(), "Order cancelled.")?,
        }
        Ok(())
    }

    fn list_orders(&mut self) -> Result<(), ConsoleError> {
        let orders = self.store.orders().all();
        let out = self.prompter.output();
        if orders.is_empty() {
            writeln!(out, "No orders.")?;
            return Ok(());
        }

        writeln!(out, "--- All orders ---")?;
        for order in orders {
            report::write_order_line(out, order)?;
        }
        Ok(())
    }

    fn customer_orders(&mut self) -> Result<(), ConsoleError> {
        let customer = self.prompter.required_id("Customer ID")?;
        self.store.customers().require(customer)?;

        let orders = self.store.orders().for_customer(customer);
        let out = self.prompter.output();
        if orders.is_empty() {
            writeln!(out, "This customer has no orders.")?;
            return Ok(());
        }

        writeln!(out, "--- Orders of customer #{} ---", customer)?;
        for order in orders {
            report::write_order_line(out, order)?;
        }
        Ok(())
    }

    fn change_order_status(&mut self) -> Result<(), ConsoleError> {
        let id = self.prompter.required_id("Order ID")?;
        if self.store.orders().get(id).is_none() {
            return Err(StoreError::OrderNotFound { order: id }.into());
        }

        let statuses: Vec<&str> = OrderStatus::ALL.iter().map(OrderStatus::as_str).collect();
        writeln!(
            self.prompter.output(),
            "Available statuses: {}",
            statuses.join(", ")
        )?;
        let status: OrderStatus = self.prompter.required_string("New status")?.parse()?;

        let order = self.store.update_order_status(id, status)?;
        writeln!(
            self.prompter.output(),
            "Order #{} status changed to '{}'.",
            order.id,
            order.status
        )?;
        Ok(())
    }

    // Statistics

    fn show_statistics(&mut self) -> Result<(), ConsoleError> {
        let stats = self.store.statistics()?;
        report::write_statistics(self.prompter.output(), &stats)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entry_count<M: Menu>() -> usize {
        M::ENTRIES.len()
    }

    #[rstest]
    #[case::main(entry_count::<MainCommand>(), 6)]
    #[case::catalog(entry_count::<CatalogCommand>(), 6)]
    #[case::customers(entry_count::<CustomerCommand>(), 4)]
    #[case::cart(entry_count::<CartCommand>(), 6)]
    #[case::orders(entry_count::<OrderCommand>(), 5)]
    fn test_menu_sizes(#[case] actual: usize, #[case] expected: usize) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_back_is_always_last() {
        assert_eq!(MainCommand::ENTRIES[5].0, MainCommand::Exit);
        assert_eq!(CatalogCommand::ENTRIES[5].0, CatalogCommand::Back);
        assert_eq!(CustomerCommand::ENTRIES[3].0, CustomerCommand::Back);
        assert_eq!(CartCommand::ENTRIES[5].0, CartCommand::Back);
        assert_eq!(OrderCommand::ENTRIES[4].0, OrderCommand::Back);
    }

    #[test]
    fn test_session_ends_on_end_of_input() {
        let mut console = Console::new(Store::default(), "1\n".as_bytes(), Vec::new());
        assert!(console.run().is_ok());

        let (_, output) = console.into_parts();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("=== Online store \"TechStore\" ==="));
        assert!(output.contains("=== Products ==="));
    }

    #[test]
    fn test_status_prompt_lists_validated_set() {
        let script = "\
            1\n1\nLaptop\n\n100\nElectronics\n5\n6\n\
            2\n1\nOlena\n+380501234567\nolena@example.com\nKyiv\n4\n\
            3\n1\n1\n1\n1\n6\n\
            4\n1\n1\ny\n4\n1\nshipped\n5\n6\n";
        let mut console = Console::new(Store::default(), script.as_bytes(), Vec::new());
        console.run().unwrap();

        let (store, output) = console.into_parts();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Available statuses: pending, completed, cancelled"));
        assert!(output.contains("Error: Unknown order status 'shipped'"));
        assert_eq!(store.orders().all()[0].status, OrderStatus::Pending);
    }
}
