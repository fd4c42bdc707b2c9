use super::ast::*;

enum ASTPrinterMode {
    Stdout,
    Collect(Vec<String>),
}

pub struct ASTPrinter {
    indent: i32,
    mode: ASTPrinterMode,
}

impl ASTPrinter {
    pub fn new() -> ASTPrinter {
        ASTPrinter {
            indent: 0,
            mode: ASTPrinterMode::Stdout,
        }
    }

    pub fn collect() -> ASTPrinter {
        ASTPrinter {
            indent: 0,
            mode: ASTPrinterMode::Collect(Vec::new()),
        }
    }

    pub fn collected(&self) -> &[String] {
        match &self.mode {
            ASTPrinterMode::Collect(collection) => &collection,
            _ => &[],
        }
    }

    pub fn print(&mut self, program: &Program) {
        self.write_node("Program", "", program);
        self.indent(|printer| {
            program
                .resources
                .iter()
                .for_each(|r| printer.print_resource(r));
        });
    }

    pub fn print_resource(&mut self, resource: &Resource) {
        self.write_node("Resource", &format!("id: {}", resource.id.name), resource);
        self.indent(|printer| {
            resource
                .attributes
                .iter()
                .for_each(|a| printer.print_attribute(a));
        });
    }

    pub fn print_attribute(&mut self, attribute: &Attribute) {
        self.write_node("Attribute", &format!("id: {}", attribute.id.name), attribute);
        self.indent(|printer| {
            let condition = &attribute.condition;
            printer.write_node("With", &format!("condition: {}", condition.text), condition);
            printer.write_ln("Of");
            printer.indent(|printer| {
                for value in &attribute.values {
                    printer.write_node("Value", &value.text, value);
                }
            });
        });
    }

    fn write_node<N: ContainsPosition>(&mut self, name: &str, detail: &str, node: &N) {
        if detail.is_empty() {
            self.write_ln(&format!("{}({})", name, node.position()));
        } else {
            self.write_ln(&format!("{}({}, {})", name, detail, node.position()));
        }
    }

    fn write_ln(&mut self, token: &str) {
        let indent = if self.indent > 0 {
            (1..self.indent).map(|_| "|  ").collect::<String>() + "|--"
        } else {
            String::new()
        };

        let line = format!("{}{}", indent, token);

        match &mut self.mode {
            ASTPrinterMode::Stdout => println!("{}", line),
            ASTPrinterMode::Collect(collection) => collection.push(line),
        }
    }

    fn indent<T>(&mut self, block: T)
    where
        T: FnOnce(&mut ASTPrinter),
    {
        self.indent += 1;
        block(self);
        self.indent -= 1;
    }
}
