use dioxus::prelude::*;

#[component]
pub fn Table(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "w-full overflow-x-auto",
            table {
                class: "w-full caption-bottom text-sm {class}",
                {children}
            }
        }
    }
}

#[component]
pub fn TableHeader(children: Element) -> Element {
    rsx! {
        thead { class: "border-b border-neutral-200", {children} }
    }
}

#[component]
pub fn TableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn TableRow(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        tr {
            class: "border-b border-neutral-100 hover:bg-neutral-50 {class}",
            {children}
        }
    }
}

#[component]
pub fn TableHead(children: Element) -> Element {
    rsx! {
        th {
            class: "h-10 px-2 text-left align-middle font-medium text-neutral-500",
            {children}
        }
    }
}

#[component]
pub fn TableCell(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        td {
            class: "p-2 align-middle {class}",
            {children}
        }
    }
}
